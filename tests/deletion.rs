// tests/deletion.rs

//! Deletion tests: ingredient cascades, conflicts, recipe deletes and the
//! consistency of the join collections afterwards.

mod common;

use common::{by_both, by_id, by_name, no_key, sample_catalog};
use recipe_catalog::catalog::deletion::{
    INGREDIENT_CONFLICT_MESSAGE, INGREDIENT_NOT_FOUND_MESSAGE, RECIPE_DELETED_MESSAGE,
};
use recipe_catalog::db::models::IngredientRestriction;
use recipe_catalog::{Error, Ingredient, IngredientDeletion, Recipe, RecipeIngredient};

/// Every join row points at a live recipe and a live ingredient
fn assert_no_dangling_links(catalog: &recipe_catalog::Catalog) {
    let conn = catalog.storage().conn();
    for link in RecipeIngredient::list_all(conn).unwrap() {
        assert!(Recipe::find_by_id(conn, link.recipe_id).unwrap().is_some(), "{:?}", link);
        assert!(
            Ingredient::find_by_id(conn, link.ingredient_id).unwrap().is_some(),
            "{:?}",
            link
        );
    }
}

#[test]
fn test_delete_ingredient_with_one_recipe() {
    for params in [by_id(4), by_name("Tomatoes"), by_both(5436, "Tomatoes")] {
        let mut catalog = sample_catalog();

        let outcome = catalog.delete_ingredient(&params).unwrap();
        assert_eq!(outcome.message(), None, "{:?}", params);
        assert!(outcome.is_deleted());

        let conn = catalog.storage().conn();
        assert!(Ingredient::find_by_id(conn, 4).unwrap().is_none());
        assert!(Recipe::find_by_id(conn, 3).unwrap().is_none());
        assert!(RecipeIngredient::find_by_recipe(conn, 3).unwrap().is_empty());
        assert_eq!(catalog.stats().unwrap().recipes, 10);
        assert_no_dangling_links(&catalog);
    }
}

#[test]
fn test_delete_ingredient_cascade_removes_restriction_rows() {
    let mut catalog = sample_catalog();

    // Walnuts: only in Walnut Brownies, forbidden under Nut-Free
    let outcome = catalog.delete_ingredient(&by_name("Walnuts")).unwrap();
    assert!(outcome.is_deleted());

    let conn = catalog.storage().conn();
    assert!(IngredientRestriction::find_by_ingredient(conn, 10).unwrap().is_empty());
    assert!(Recipe::find_by_id(conn, 6).unwrap().is_none());
}

#[test]
fn test_delete_shared_ingredient_is_refused() {
    let mut catalog = sample_catalog();
    let before = catalog.stats().unwrap();

    let outcome = catalog.delete_ingredient(&by_id(6)).unwrap();

    assert_eq!(outcome.message(), Some(INGREDIENT_CONFLICT_MESSAGE));
    assert!(matches!(outcome, IngredientDeletion::Conflict { references: 2, .. }));
    assert_eq!(catalog.stats().unwrap(), before);
}

#[test]
fn test_delete_unreferenced_ingredient_is_refused() {
    let mut catalog = sample_catalog();

    // Removing Margherita Pizza leaves Mozzarella without recipes
    assert!(catalog.delete_ingredient(&by_name("Tomatoes")).unwrap().is_deleted());

    let outcome = catalog.delete_ingredient(&by_name("Mozzarella")).unwrap();
    assert_eq!(outcome.message(), Some(INGREDIENT_CONFLICT_MESSAGE));
    assert!(matches!(outcome, IngredientDeletion::Conflict { references: 0, .. }));
    assert!(Ingredient::find_by_id(catalog.storage().conn(), 12).unwrap().is_some());
}

#[test]
fn test_delete_unknown_ingredient_is_not_found() {
    for params in [by_id(5436), by_name("Roma tomatoes"), by_both(5436, "Roma tomatoes")] {
        let mut catalog = sample_catalog();
        let before = catalog.stats().unwrap();

        let outcome = catalog.delete_ingredient(&params).unwrap();
        assert_eq!(outcome, IngredientDeletion::NotFound);
        assert_eq!(outcome.message(), Some(INGREDIENT_NOT_FOUND_MESSAGE));
        assert_eq!(catalog.stats().unwrap(), before);
    }
}

#[test]
fn test_delete_ingredient_without_key_is_invalid() {
    let mut catalog = sample_catalog();
    assert!(matches!(
        catalog.delete_ingredient(&no_key()),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_delete_recipe() {
    for params in [by_id(1), by_name("Spaghetti Carbonara")] {
        let mut catalog = sample_catalog();

        let deletion = catalog.delete_recipe(&params).unwrap();
        assert_eq!(deletion.message(), RECIPE_DELETED_MESSAGE);
        assert_eq!(deletion.recipe.id, 1);
        assert_eq!(deletion.links_removed, 3);

        let conn = catalog.storage().conn();
        assert!(Recipe::find_by_id(conn, 1).unwrap().is_none());
        assert!(RecipeIngredient::find_by_recipe(conn, 1).unwrap().is_empty());
        // Ingredients outlive the recipe
        assert!(Ingredient::find_by_id(conn, 1).unwrap().is_some());
        assert_no_dangling_links(&catalog);
    }
}

#[test]
fn test_repeated_recipe_delete_is_rejected() {
    let mut catalog = sample_catalog();

    catalog.delete_recipe(&by_id(1)).unwrap();
    assert!(matches!(catalog.delete_recipe(&by_id(1)), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_delete_unresolvable_recipe_is_rejected() {
    let mut catalog = sample_catalog();

    let err = catalog
        .delete_recipe(&by_both(5416, "sdvksklvndsvb"))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(matches!(catalog.delete_recipe(&no_key()), Err(Error::InvalidArgument(_))));
    assert_eq!(catalog.stats().unwrap().recipes, 11);
}

#[test]
fn test_deleted_recipe_disappears_from_queries() {
    let mut catalog = sample_catalog();

    catalog.delete_recipe(&by_name("Hot Cocoa")).unwrap();

    assert_eq!(catalog.recipes_by_ingredient(&by_id(9)).unwrap().len(), 1);
    assert!(catalog.recipes(&by_name("Hot Cocoa")).unwrap().is_empty());
}
