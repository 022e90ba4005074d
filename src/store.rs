//! Create/read/update/delete operations per entity, with relationship
//! loading as an explicit per-call option.

use diesel::prelude::*;

use crate::models::{
    Menu, MenuItem, NewMenu, NewMenuItem, NewRestaurant, Restaurant, RestaurantChangeset,
};
use crate::schema::{menu_items, menus, restaurants};

/// Which related records a restaurant query loads alongside the row itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestaurantInclude {
    None,
    Menus,
    MenusWithItems,
}

/// Which related records a menu query loads alongside the row itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuInclude {
    None,
    Items,
}

#[derive(Debug, PartialEq)]
pub struct RestaurantRecord {
    pub restaurant: Restaurant,
    /// `Some` only when the query asked for menus.
    pub menus: Option<Vec<MenuRecord>>,
}

#[derive(Debug, PartialEq)]
pub struct MenuRecord {
    pub menu: Menu,
    /// `Some` only when the query asked for menu items.
    pub items: Option<Vec<MenuItem>>,
}

// Lets `grouped_by` bucket already-assembled menu records under their
// restaurants, the same way it buckets bare `Menu` rows.
impl diesel::associations::BelongsTo<Restaurant> for MenuRecord {
    type ForeignKey = i32;
    type ForeignKeyColumn = menus::restaurant_id;

    fn foreign_key(&self) -> Option<&Self::ForeignKey> {
        Some(&self.menu.restaurant_id)
    }

    fn foreign_key_column() -> Self::ForeignKeyColumn {
        menus::restaurant_id
    }
}

pub fn create_restaurant(
    conn: &mut SqliteConnection,
    new: &NewRestaurant,
) -> QueryResult<Restaurant> {
    diesel::insert_into(restaurants::table)
        .values(new)
        .returning(Restaurant::as_returning())
        .get_result(conn)
}

pub fn list_restaurants(
    conn: &mut SqliteConnection,
    include: RestaurantInclude,
) -> QueryResult<Vec<RestaurantRecord>> {
    let rows = restaurants::table
        .select(Restaurant::as_select())
        .load(conn)?;

    if include == RestaurantInclude::None {
        return Ok(rows
            .into_iter()
            .map(|restaurant| RestaurantRecord {
                restaurant,
                menus: None,
            })
            .collect());
    }

    let groups = load_menu_records(conn, &rows, include == RestaurantInclude::MenusWithItems)?;
    Ok(rows
        .into_iter()
        .zip(groups)
        .map(|(restaurant, menus)| RestaurantRecord {
            restaurant,
            menus: Some(menus),
        })
        .collect())
}

pub fn find_restaurant(
    conn: &mut SqliteConnection,
    id: i32,
    include: RestaurantInclude,
) -> QueryResult<Option<RestaurantRecord>> {
    let restaurant = restaurants::table
        .find(id)
        .select(Restaurant::as_select())
        .first(conn)
        .optional()?;
    let Some(restaurant) = restaurant else {
        return Ok(None);
    };

    if include == RestaurantInclude::None {
        return Ok(Some(RestaurantRecord {
            restaurant,
            menus: None,
        }));
    }

    let groups = load_menu_records(
        conn,
        std::slice::from_ref(&restaurant),
        include == RestaurantInclude::MenusWithItems,
    )?;
    let menus = groups.into_iter().next().unwrap_or_default();
    Ok(Some(RestaurantRecord {
        restaurant,
        menus: Some(menus),
    }))
}

/// Applies the changeset in a single conditional UPDATE keyed by id and
/// returns the updated row, or `None` when no row matched. There is no
/// prior existence check to race against.
pub fn update_restaurant(
    conn: &mut SqliteConnection,
    id: i32,
    changes: &RestaurantChangeset,
) -> QueryResult<Option<Restaurant>> {
    if changes.is_empty() {
        return restaurants::table
            .find(id)
            .select(Restaurant::as_select())
            .first(conn)
            .optional();
    }

    diesel::update(restaurants::table.find(id))
        .set(changes)
        .returning(Restaurant::as_returning())
        .get_result(conn)
        .optional()
}

/// Returns the number of rows removed; deleting an absent id is not an
/// error. Owned menus and items go with the restaurant (cascading FK).
pub fn delete_restaurant(conn: &mut SqliteConnection, id: i32) -> QueryResult<usize> {
    diesel::delete(restaurants::table.find(id)).execute(conn)
}

pub fn create_menu(conn: &mut SqliteConnection, new: &NewMenu) -> QueryResult<Menu> {
    diesel::insert_into(menus::table)
        .values(new)
        .returning(Menu::as_returning())
        .get_result(conn)
}

pub fn find_menu(
    conn: &mut SqliteConnection,
    id: i32,
    include: MenuInclude,
) -> QueryResult<Option<MenuRecord>> {
    let menu = menus::table
        .find(id)
        .select(Menu::as_select())
        .first(conn)
        .optional()?;
    let Some(menu) = menu else {
        return Ok(None);
    };

    let items = match include {
        MenuInclude::Items => Some(
            MenuItem::belonging_to(&menu)
                .select(MenuItem::as_select())
                .load(conn)?,
        ),
        MenuInclude::None => None,
    };
    Ok(Some(MenuRecord { menu, items }))
}

pub fn create_menu_item(conn: &mut SqliteConnection, new: &NewMenuItem) -> QueryResult<MenuItem> {
    diesel::insert_into(menu_items::table)
        .values(new)
        .returning(MenuItem::as_returning())
        .get_result(conn)
}

pub fn list_menu_items(conn: &mut SqliteConnection) -> QueryResult<Vec<MenuItem>> {
    menu_items::table.select(MenuItem::as_select()).load(conn)
}

/// Batch-loads the menus of `parents` (and optionally their items) and
/// buckets them per parent, in parent order.
fn load_menu_records(
    conn: &mut SqliteConnection,
    parents: &[Restaurant],
    with_items: bool,
) -> QueryResult<Vec<Vec<MenuRecord>>> {
    let menu_rows = Menu::belonging_to(parents)
        .select(Menu::as_select())
        .load::<Menu>(conn)?;

    let records: Vec<MenuRecord> = if with_items {
        let items = MenuItem::belonging_to(&menu_rows)
            .select(MenuItem::as_select())
            .load::<MenuItem>(conn)?
            .grouped_by(&menu_rows);
        menu_rows
            .into_iter()
            .zip(items)
            .map(|(menu, items)| MenuRecord {
                menu,
                items: Some(items),
            })
            .collect()
    } else {
        menu_rows
            .into_iter()
            .map(|menu| MenuRecord { menu, items: None })
            .collect()
    };

    Ok(records.grouped_by(parents))
}
