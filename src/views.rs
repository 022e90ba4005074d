//! Server-rendered pages. Each struct pairs one route's data with its
//! template; absent records render as an empty page rather than an error.

use askama::Template;

use crate::models::MenuItem;
use crate::store::{MenuRecord, RestaurantRecord};

#[derive(Template)]
#[template(path = "restaurants.html")]
pub struct RestaurantsTemplate {
    pub restaurants: Vec<RestaurantRecord>,
}

#[derive(Template)]
#[template(path = "restaurant.html")]
pub struct RestaurantTemplate {
    pub restaurant: Option<RestaurantRecord>,
}

#[derive(Template)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub menu: Option<MenuRecord>,
}

#[derive(Template)]
#[template(path = "menu_items.html")]
pub struct MenuItemsTemplate {
    pub items: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Menu, Restaurant};

    fn sample_record() -> RestaurantRecord {
        RestaurantRecord {
            restaurant: Restaurant {
                id: 1,
                name: "Golden Wok".to_string(),
                image: "https://images.example.com/golden-wok.png".to_string(),
            },
            menus: Some(vec![MenuRecord {
                menu: Menu {
                    id: 7,
                    restaurant_id: 1,
                    title: "Lunch Specials".to_string(),
                },
                items: Some(vec![MenuItem {
                    id: 42,
                    menu_id: 7,
                    name: "Spring Rolls".to_string(),
                    price: 4.5,
                    description: "Two crispy vegetable rolls".to_string(),
                }]),
            }]),
        }
    }

    #[test]
    fn restaurant_page_renders_the_nested_hierarchy() {
        let html = RestaurantTemplate {
            restaurant: Some(sample_record()),
        }
        .render()
        .unwrap();

        assert!(html.contains("Golden Wok"));
        assert!(html.contains("Lunch Specials"));
        assert!(html.contains("Spring Rolls"));
        assert!(html.contains("4.50"));
    }

    #[test]
    fn absent_restaurant_renders_an_empty_page() {
        let html = RestaurantTemplate { restaurant: None }.render().unwrap();
        assert!(html.contains("No restaurant to show."));
    }

    #[test]
    fn list_page_links_each_restaurant_and_its_menus() {
        let html = RestaurantsTemplate {
            restaurants: vec![sample_record()],
        }
        .render()
        .unwrap();

        assert!(html.contains("/restaurants/1"));
        assert!(html.contains("/menus/7"));
        assert!(html.contains("Golden Wok"));
    }

    #[test]
    fn stored_markup_never_reaches_the_page_raw() {
        let mut record = sample_record();
        record.restaurant.name = "Cafe &lt;script&gt;".to_string();

        let html = RestaurantTemplate {
            restaurant: Some(record),
        }
        .render()
        .unwrap();

        assert!(html.contains("Cafe &amp;lt;script&amp;gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn menu_page_falls_back_when_the_record_is_absent() {
        let html = MenuTemplate { menu: None }.render().unwrap();
        assert!(html.contains("No menu to show."));
    }

    #[test]
    fn items_page_lists_every_item_with_prices() {
        let html = MenuItemsTemplate {
            items: vec![
                MenuItem {
                    id: 1,
                    menu_id: 1,
                    name: "Elote".to_string(),
                    price: 4.25,
                    description: "Grilled corn, cotija, lime".to_string(),
                },
                MenuItem {
                    id: 2,
                    menu_id: 1,
                    name: "Horchata".to_string(),
                    price: 3.0,
                    description: "Cinnamon rice milk over ice".to_string(),
                },
            ],
        }
        .render()
        .unwrap();

        assert!(html.contains("Elote"));
        assert!(html.contains("Horchata"));
        assert!(html.contains("3.00"));
    }

    #[test]
    fn empty_collections_render_their_empty_states() {
        let html = RestaurantsTemplate {
            restaurants: vec![],
        }
        .render()
        .unwrap();
        assert!(html.contains("No restaurants yet."));

        let html = MenuItemsTemplate { items: vec![] }.render().unwrap();
        assert!(html.contains("No items yet."));
    }
}
