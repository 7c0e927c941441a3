//! Fixed driver scenarios and end-to-end manager properties

use order_manager::driver::{self, DriverCommand};
use order_manager::{ManagerError, OrderManager};
use shared::models::{Beverage, Dessert, Entree, MenuConfig, PriceTable, Salad};
use shared::order::OrderInput;

fn run_line(manager: &OrderManager, line: &str) -> String {
    let mut out = Vec::new();
    if let Some(command) = DriverCommand::parse(line) {
        driver::run_command(manager, command, &mut out).expect("driver output failed");
    }
    String::from_utf8(out).expect("driver output is utf-8")
}

#[test]
fn test_order_scenario() {
    let manager = OrderManager::default();
    assert_eq!(run_line(&manager, "P"), "");

    let check = manager.get_check(1).expect("table 1 exists");
    assert_eq!(check.lines.len(), 1);
    assert_eq!(check.lines[0].seat, 1);
    assert_eq!(check.lines[0].order.entree, Entree::Steak);
    assert_eq!(check.total, PriceTable::default().entree(Entree::Steak));
}

#[test]
fn test_check_scenario() {
    let manager = OrderManager::default();
    let expected = format!(
        "The Total is {}\n",
        PriceTable::default().entree(Entree::Chicken)
    );
    assert_eq!(run_line(&manager, "G"), expected);
}

#[test]
fn test_each_command_letter_any_case() {
    for line in ["p", "P", "c", "C", "g", "G", "a", "A"] {
        let manager = OrderManager::default();
        let out = run_line(&manager, line);
        if line.eq_ignore_ascii_case("g") {
            assert_eq!(out, "The Total is 10\n");
        } else {
            assert_eq!(out, "", "command {} prints nothing", line);
        }
    }
}

#[test]
fn test_unrecognised_command_does_nothing() {
    let manager = OrderManager::default();
    assert_eq!(run_line(&manager, "Z"), "");
    assert!(manager.table_ids().is_empty());
}

#[test]
fn test_session_place_then_clear() {
    let manager = OrderManager::default();
    run_line(&manager, "P");
    run_line(&manager, "C");
    assert_eq!(manager.get_check_total(1), Ok(0));
}

#[test]
fn test_clear_never_leaves_stale_total() {
    let manager = OrderManager::default();
    manager
        .place_order(2, 2, OrderInput::new(Entree::Chicken))
        .unwrap();
    assert_eq!(manager.get_check_total(2), Ok(10));

    manager.clear_table(2);
    assert_eq!(manager.get_check_total(2), Ok(0));

    manager.clear_table(6);
    assert_eq!(manager.get_check_total(6), Err(ManagerError::UnknownTable(6)));
}

#[test]
fn test_promotion_end_to_end_with_file_menu() {
    use std::io::Write;

    let mut menu = MenuConfig::default();
    menu.prices.entrees.steak = 30;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string_pretty(&menu).unwrap().as_bytes())
        .unwrap();

    let menu = order_manager::core::load_menu_file(file.path()).unwrap();
    let manager = OrderManager::new(menu, 4);

    let mut order = OrderInput::new(Entree::Steak)
        .with_salad(Salad::Caesar)
        .with_beverage(Beverage::MixedDrink);
    manager.add_included_dessert(&mut order);
    assert_eq!(order.dessert, Dessert::IncludedDessert);

    manager.place_order(1, 1, order).unwrap();
    assert_eq!(manager.get_check_total(1), Ok(30 + 4 + 7));
}
