//! Schema and starter-data management, run explicitly at startup instead
//! of as an import-time side effect.

use diesel::prelude::*;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::models::{NewMenu, NewMenuItem, NewRestaurant};
use crate::schema::restaurants;
use crate::store;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Brings the schema up to date and seeds starter rows into an empty
/// database. Calling it again on a populated database changes nothing.
pub fn init(conn: &mut SqliteConnection) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    conn.run_pending_migrations(MIGRATIONS)?;
    seed(conn)?;
    Ok(())
}

fn seed(conn: &mut SqliteConnection) -> QueryResult<()> {
    let existing: i64 = restaurants::table.count().get_result(conn)?;
    if existing > 0 {
        return Ok(());
    }

    for (name, image, menus) in starter_data() {
        let restaurant = store::create_restaurant(
            conn,
            &NewRestaurant {
                name: name.to_string(),
                image: image.to_string(),
            },
        )?;
        for (title, items) in menus {
            let menu = store::create_menu(
                conn,
                &NewMenu {
                    restaurant_id: restaurant.id,
                    title: title.to_string(),
                },
            )?;
            for (item_name, price, description) in items {
                store::create_menu_item(
                    conn,
                    &NewMenuItem {
                        menu_id: menu.id,
                        name: item_name.to_string(),
                        price,
                        description: description.to_string(),
                    },
                )?;
            }
        }
    }

    Ok(())
}

type StarterMenu = (&'static str, Vec<(&'static str, f64, &'static str)>);

fn starter_data() -> Vec<(&'static str, &'static str, Vec<StarterMenu>)> {
    vec![
        (
            "Golden Wok",
            "https://images.example.com/golden-wok.png",
            vec![
                (
                    "Lunch Specials",
                    vec![
                        ("Spring Rolls", 4.50, "Two crispy rolls with dipping sauce"),
                        ("Fried Rice", 8.95, "Wok-fried rice with egg and scallions"),
                    ],
                ),
                (
                    "Dinner",
                    vec![
                        ("Kung Pao Chicken", 12.50, "Stir-fried with peanuts and chilies"),
                        ("Crispy Duck", 18.00, "Half duck with pancakes and hoisin"),
                    ],
                ),
            ],
        ),
        (
            "Trattoria Nonna",
            "https://images.example.com/trattoria-nonna.png",
            vec![
                (
                    "Antipasti",
                    vec![
                        ("Bruschetta", 5.00, "Grilled bread, tomato, basil"),
                        ("Caprese", 7.50, "Buffalo mozzarella and heirloom tomato"),
                    ],
                ),
                (
                    "Mains",
                    vec![
                        ("Lasagna al Forno", 13.00, "Layered pasta with slow beef ragu"),
                        ("Risotto ai Funghi", 14.50, "Carnaroli rice with porcini"),
                    ],
                ),
            ],
        ),
        (
            "Taco Verde",
            "https://images.example.com/taco-verde.png",
            vec![
                (
                    "Street Food",
                    vec![
                        ("Carnitas Taco", 3.75, "Braised pork, onion, cilantro"),
                        ("Elote", 4.25, "Grilled corn, cotija, lime"),
                    ],
                ),
                (
                    "Drinks",
                    vec![
                        ("Horchata", 3.00, "Cinnamon rice milk over ice"),
                        ("Agua de Jamaica", 2.75, "Hibiscus cooler, lightly sweet"),
                    ],
                ),
            ],
        ),
    ]
}
