use diesel::prelude::*;

use crate::schema::{menu_items, menus, restaurants};

#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq)]
#[diesel(table_name = restaurants)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub image: String,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, PartialEq)]
#[diesel(belongs_to(Restaurant))]
#[diesel(table_name = menus)]
pub struct Menu {
    pub id: i32,
    pub restaurant_id: i32,
    pub title: String,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, PartialEq)]
#[diesel(belongs_to(Menu))]
#[diesel(table_name = menu_items)]
pub struct MenuItem {
    pub id: i32,
    pub menu_id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant {
    pub name: String,
    pub image: String,
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = menus)]
pub struct NewMenu {
    pub restaurant_id: i32,
    pub title: String,
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItem {
    pub menu_id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Field overwrites for a restaurant, applied in a single conditional
/// UPDATE. `None` fields are left untouched.
#[derive(AsChangeset, Debug, Default, PartialEq)]
#[diesel(table_name = restaurants)]
pub struct RestaurantChangeset {
    pub name: Option<String>,
    pub image: Option<String>,
}

impl RestaurantChangeset {
    /// An all-`None` changeset cannot be turned into an UPDATE statement
    /// (empty SET list), so callers check before executing one.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none()
    }
}
