//! Context menu actions and visuals.

use crate::helpers::TestManagerBuilder;
use regionkit::constants::{CLASS_MENU_ICON, CLASS_MENU_LAYER};
use regionkit::error::RegionError;
use regionkit::menu::MenuAction;

#[test]
fn test_menu_offers_delete() {
    let (manager, _) = TestManagerBuilder::new().build();
    let actions: Vec<MenuAction> = manager.menu().actions().collect();
    assert_eq!(actions, vec![MenuAction::Delete]);
    assert!(manager.surface().has_class(manager.menu().group(), CLASS_MENU_LAYER));
}

#[test]
fn test_menu_hidden_until_a_region_exists() {
    let (mut manager, _) = TestManagerBuilder::new().build();
    let group = manager.menu().group();
    assert!(!manager.menu().is_visible());
    assert_eq!(manager.menu().attached(), None);

    let surface = manager.surface_mut();
    surface.paint();
    assert!(!surface.is_visible(group));
}

#[test]
fn test_delete_action_removes_attached_region() {
    let (mut manager, ids) = TestManagerBuilder::new()
        .with_region((0.0, 0.0), (50.0, 50.0))
        .with_region((100.0, 100.0), (150.0, 150.0))
        .build();

    manager.activate_menu_action(MenuAction::Delete).expect("menu attached");

    assert_eq!(manager.len(), 1);
    assert!(manager.region(ids[1]).is_none());
    assert!(manager.region(ids[0]).is_some());
    assert!(!manager.menu().is_visible());
    assert_eq!(manager.menu().attached(), None);

    let err = manager.activate_menu_action(MenuAction::Delete).unwrap_err();
    assert!(matches!(err, RegionError::NoMenuTarget));
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_delete_icon_is_drawn() {
    let (manager, _) = TestManagerBuilder::new().build();
    let surface = manager.surface();
    let group = manager.menu().group();

    // menu group -> items group -> item -> icon
    let icon_class = format!("{}-{}", CLASS_MENU_ICON, MenuAction::Delete.icon());
    let has_icon = surface.children(group).into_iter().any(|items| {
        surface.children(items).into_iter().any(|item| {
            surface
                .children(item)
                .into_iter()
                .any(|h| surface.has_class(h, &icon_class))
        })
    });
    assert!(has_icon);
}
