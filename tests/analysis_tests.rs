//! End-to-end checks of analysis behaviour over realistic inventories.

use cocktail_core::{
    analyze, generate_shopping_list, has_ingredient, Analyzer, AnalysisResult, AvailabilityIndex,
    InventoryItem, Recipe, RecipeMatch, Tier, COMPATIBILITY_THRESHOLD,
};
use serde_json::json;

fn inventory(names: &[&str]) -> Vec<InventoryItem> {
    names.iter().map(|n| InventoryItem::in_stock(*n)).collect()
}

fn tiki_recipes() -> Vec<Recipe> {
    vec![
        Recipe::from_text(
            "Daiquiri",
            "2 oz light rum\n1 oz fresh lime juice\n0.75 oz simple syrup",
        ),
        Recipe::from_text(
            "Mai Tai",
            "1 oz gold rum\n1 oz dark jamaican rum\n3/4 oz lime juice\n\
             1/2 oz orange curacao\n1/2 oz orgeat syrup\nMint sprig for garnish",
        ),
        Recipe::from_text(
            "Hurricane",
            "2 oz dark rum\n2 oz passion fruit syrup\n1/2 oz grenadine",
        ),
        Recipe::from_text(
            "Margarita",
            "2 oz tequila\n1 oz triple sec\n1 oz lime juice\nSalt rim",
        ),
        Recipe::from_text("Broken", ""),
        Recipe::from_text("", "2 oz gin"),
    ]
}

fn tiki_bar() -> Vec<InventoryItem> {
    inventory(&[
        "Hamilton 86",
        "Hamilton Jamaican Pot Still Black",
        "Light Rum",
        "Lime Juice",
        "Orgeat",
        "Pierre Ferrand Dry Curaçao",
        "Passion Fruit Syrup",
    ])
}

fn all_matches(result: &AnalysisResult) -> Vec<&RecipeMatch> {
    result.iter().collect()
}

#[test]
fn test_daiquiri_scenario() {
    let index = AvailabilityIndex::from_inventory(&inventory(&["Light Rum", "Lime Juice"]));
    let result = analyze(&index, &tiki_recipes()[..1]);

    assert!(result.perfect.is_empty());
    assert!(result.very_good.is_empty());
    assert_eq!(result.good.len(), 1);

    let daiquiri = &result.good[0];
    assert_eq!(daiquiri.compatibility, 67);
    assert_eq!(daiquiri.tier, Tier::Good);
    assert_eq!(daiquiri.matched, vec!["2 oz light rum", "1 oz fresh lime juice"]);
    assert_eq!(daiquiri.missing, vec!["0.75 oz simple syrup"]);
}

#[test]
fn test_alias_expansion_satisfies_style() {
    let index = AvailabilityIndex::from_inventory(&inventory(&["Hamilton 86"]));
    assert!(has_ingredient("1 oz gold rum", &index, COMPATIBILITY_THRESHOLD));
}

#[test]
fn test_spacing_difference_matches() {
    let index = AvailabilityIndex::from_inventory(&inventory(&["Passion Fruit Syrup"]));
    assert!(has_ingredient("1/2 oz passionfruit syrup", &index, COMPATIBILITY_THRESHOLD));
}

#[test]
fn test_unrelated_liqueur_does_not_match() {
    let index = AvailabilityIndex::from_inventory(&inventory(&["Orange Curaçao"]));
    assert!(!has_ingredient("1 oz Grand Marnier", &index, COMPATIBILITY_THRESHOLD));
}

#[test]
fn test_garnish_matches_with_empty_inventory() {
    let index = AvailabilityIndex::from_inventory(&[]);
    assert!(has_ingredient("Mint sprig for garnish", &index, COMPATIBILITY_THRESHOLD));
    assert!(has_ingredient("Lemon wheel, to GARNISH", &index, COMPATIBILITY_THRESHOLD));
}

#[test]
fn test_tiki_bar_tiers() {
    let result = Analyzer::default().analyze(&tiki_bar(), &tiki_recipes());

    let names = |tier: Tier| {
        result
            .tier(tier)
            .iter()
            .map(RecipeMatch::name)
            .collect::<Vec<_>>()
    };
    assert_eq!(names(Tier::Perfect), vec!["Mai Tai"]);
    // Hurricane: grenadine missing, 2 of 3
    assert_eq!(names(Tier::Good), vec!["Daiquiri", "Hurricane"]);
    assert!(names(Tier::VeryGood).is_empty());
}

#[test]
fn test_malformed_recipes_never_appear() {
    let result = Analyzer::default().analyze(&tiki_bar(), &tiki_recipes());
    assert!(result.iter().all(|m| !m.name().is_empty() && m.name() != "Broken"));
}

#[test]
fn test_empty_inputs_give_empty_result() {
    let analyzer = Analyzer::default();
    assert!(analyzer.analyze(&[], &tiki_recipes()).is_empty());
    assert!(analyzer.analyze(&tiki_bar(), &[]).is_empty());

    // pantry staples alone do not make anything
    let only_staples = vec![Recipe::from_text("Ice Water", "1 cup ice\n4 oz water")];
    assert!(analyze(&AvailabilityIndex::from_inventory(&[]), &only_staples).is_empty());
    let sold_out = vec![InventoryItem::new("Gin", false)];
    assert!(analyzer.analyze(&sold_out, &only_staples).is_empty());
}

#[test]
fn test_compatibility_invariants() {
    let result = Analyzer::default().analyze(&tiki_bar(), &tiki_recipes());

    for m in all_matches(&result) {
        assert!(m.compatibility <= 100);
        assert_eq!(m.compatibility == 100, m.missing.is_empty());
        assert_eq!(m.total(), m.recipe.ingredient_lines().count());
        let expected = (100.0 * m.matched.len() as f64 / m.total() as f64).round() as u8;
        assert_eq!(m.compatibility, expected);
        assert_eq!(Tier::from_compatibility(m.compatibility), m.tier);
    }
}

#[test]
fn test_each_recipe_in_one_tier() {
    let result = Analyzer::default().analyze(&tiki_bar(), &tiki_recipes());
    let mut names: Vec<&str> = result.iter().map(RecipeMatch::name).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn test_analysis_is_idempotent() {
    let analyzer = Analyzer::default();
    let first = analyzer.analyze(&tiki_bar(), &tiki_recipes());
    let second = analyzer.analyze(&tiki_bar(), &tiki_recipes());
    assert_eq!(first, second);
}

#[test]
fn test_sixty_percent_is_kept_and_fifty_nine_is_not() {
    let bar = inventory(&["Gin", "Campari", "Sweet Vermouth"]);
    let index = AvailabilityIndex::from_inventory(&bar);
    let kept = Recipe::from_text(
        "Three of Five",
        "1 oz gin\n1 oz campari\n1 oz sweet vermouth\n1 oz cynar\n1 oz lillet blanc",
    );
    let result = analyze(&index, &[kept]);
    assert_eq!(result.good.len(), 1);
    assert_eq!(result.good[0].compatibility, 60);

    // 10 of 17 rounds to 59
    let mut lines = vec!["1 oz gin"; 10];
    lines.extend(vec!["1 oz cynar"; 7]);
    let dropped = Recipe::new("Ten of Seventeen", lines.iter().map(|s| s.to_string()).collect());
    let result = analyze(&index, &[dropped]);
    assert!(result.is_empty());
}

#[test]
fn test_insertion_order_within_tier() {
    let index = AvailabilityIndex::from_inventory(&inventory(&["Gin", "Lime Juice"]));
    let recipes = vec![
        Recipe::from_text("Gimlet B", "2 oz gin\n1 oz lime juice"),
        Recipe::from_text("Gimlet A", "2 oz gin\n1 oz lime juice"),
    ];
    let result = analyze(&index, &recipes);
    let names: Vec<&str> = result.perfect.iter().map(RecipeMatch::name).collect();
    assert_eq!(names, vec!["Gimlet B", "Gimlet A"]);
}

#[test]
fn test_shopping_list_unlocks() {
    let index = AvailabilityIndex::from_inventory(&inventory(&["Tequila", "Lime Juice", "Brandy"]));
    let recipes = vec![
        Recipe::from_text("Margarita", "2 oz tequila\n1 oz triple sec\n1 oz lime juice"),
        Recipe::from_text("Sidecar", "2 oz brandy\n3/4 oz triple sec\n3/4 oz lime juice"),
    ];
    let result = analyze(&index, &recipes);
    assert_eq!(result.good.len(), 2);

    let list = generate_shopping_list(&result);
    assert_eq!(list[0].ingredient, "triple sec");
    assert_eq!(list[0].unlock_count, 2);
    assert!(list[0].recipes.contains(&"Margarita".to_string()));
    assert!(list[0].recipes.contains(&"Sidecar".to_string()));
}

#[test]
fn test_uploaded_rows_round_trip_through_analysis() {
    let inventory: Vec<InventoryItem> = serde_json::from_value(json!([
        {"Name": "Hamilton 86", "Stock Number": 2, "Type": "Rum"},
        {"Name": "Orgeat", "Stock Number": 0},
        "Lime Juice"
    ]))
    .unwrap();
    let recipes: Vec<Recipe> = serde_json::from_value(json!([
        {
            "Drink Name": "Demerara Sour",
            "Ingredients": "2 oz demerara rum\n1 oz lime juice\n1/2 oz orgeat"
        }
    ]))
    .unwrap();

    let result = Analyzer::default().analyze(&inventory, &recipes);
    assert_eq!(result.good.len(), 1);
    assert_eq!(result.good[0].missing, vec!["1/2 oz orgeat"]);
}

#[test]
fn test_malformed_upload_rows_are_skipped_not_fatal() {
    let recipes: Vec<Recipe> = serde_json::from_value(json!([
        {"Drink Name": "Gimlet", "Ingredients": "2 oz gin\n1 oz lime juice"},
        {"Ingredients": "2 oz rum"},
        {"Drink Name": null, "Ingredients": null},
        {"Drink Name": "Empty Glass", "Ingredients": null, "Glass": null}
    ]))
    .unwrap();
    assert_eq!(recipes.len(), 4);

    let inventory: Vec<InventoryItem> = serde_json::from_value(json!([
        {"Name": "Gin", "Stock Number": 1},
        {"Name": null, "Stock Number": 4},
        {"Name": "Lime Juice"}
    ]))
    .unwrap();

    let result = Analyzer::default().analyze(&inventory, &recipes);
    let names: Vec<&str> = result.iter().map(RecipeMatch::name).collect();
    assert_eq!(names, vec!["Gimlet"]);
}
