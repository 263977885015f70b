//! Frontend Models
//!
//! Render data injected by the server page, plus the plain-text
//! forms used as clipboard sources.

use serde::{Deserialize, Deserializer, Serialize};

/// Model output is loosely typed: counts may arrive as numbers or text
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Int(n) => n.to_string(),
            TextOrNumber::Float(n) => n.to_string(),
        }
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

fn opt_text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?
        .map(String::from)
        .filter(|s| !s.trim().is_empty()))
}

/// One recipe ingredient line
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Per-serving nutrition estimate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein_grams: Option<f64>,
    #[serde(default)]
    pub fat_grams: Option<f64>,
    #[serde(default)]
    pub carbohydrates_grams: Option<f64>,
}

/// Generated recipe as handed over by the server.
/// The generator calls the description `summary` and sends `servings`
/// and `estimated_time_minutes` as integers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default, alias = "summary")]
    pub description: String,
    #[serde(default, deserialize_with = "opt_text_or_number")]
    pub servings: Option<String>,
    #[serde(default)]
    pub estimated_time_minutes: Option<u32>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

/// Shopping-list / have-items entry: one of the recipe's ingredients.
/// Older payloads name the field `ingredient`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShoppingItem {
    #[serde(alias = "ingredient")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Items still to buy vs. items already on hand.
/// Disjointness is the server's job.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShoppingPartition {
    pub shopping_list: Vec<ShoppingItem>,
    pub have_items: Vec<ShoppingItem>,
}

/// "quantity unit name" with empty parts skipped
fn join_line(quantity: &str, unit: &str, name: &str) -> String {
    [quantity, unit, name]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn with_note(line: String, note: &Option<String>) -> String {
    match note.as_deref().map(str::trim) {
        Some(note) if !note.is_empty() => format!("{} ({})", line, note),
        _ => line,
    }
}

impl Ingredient {
    pub fn new(name: &str, quantity: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            note: None,
        }
    }

    pub fn display_line(&self) -> String {
        with_note(join_line(&self.quantity, &self.unit, &self.name), &self.note)
    }
}

impl ShoppingItem {
    pub fn new(name: &str, quantity: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            note: None,
        }
    }

    pub fn display_line(&self) -> String {
        with_note(join_line(&self.quantity, &self.unit, &self.name), &self.note)
    }
}

impl Recipe {
    /// Ingredient lines in input order
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients.iter().map(Ingredient::display_line).collect()
    }

    /// Numbered step lines in input order ("1. ...")
    pub fn step_lines(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step.trim()))
            .collect()
    }

    /// Whole recipe as plain text, used as the "copy recipe" source
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(self.title.trim());
        out.push('\n');
        if !self.description.trim().is_empty() {
            out.push('\n');
            out.push_str(self.description.trim());
            out.push('\n');
        }

        let meta: Vec<String> = self
            .meta_entries()
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        if !meta.is_empty() {
            out.push('\n');
            out.push_str(&meta.join(" | "));
            out.push('\n');
        }

        out.push_str("\nIngredients\n");
        for line in self.ingredient_lines() {
            out.push_str("- ");
            out.push_str(&line);
            out.push('\n');
        }

        out.push_str("\nInstructions\n");
        for line in self.step_lines() {
            out.push_str(&line);
            out.push('\n');
        }

        if !self.tips.is_empty() {
            out.push_str("\nTips\n");
            for tip in &self.tips {
                out.push_str("- ");
                out.push_str(tip.trim());
                out.push('\n');
            }
        }
        if let Some(line) = self.nutrition.as_ref().and_then(Nutrition::summary_line) {
            out.push_str("\nNutrition: ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Labelled facts shown under the title, in a fixed order
    pub fn meta_entries(&self) -> Vec<(&'static str, String)> {
        let time = self.estimated_time_minutes.map(|m| format!("{} min", m));
        [
            ("Servings", self.servings.clone()),
            ("Time", time),
            ("Prep", self.prep_time.clone()),
            ("Cook", self.cook_time.clone()),
            ("Cuisine", self.cuisine.clone()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

impl Nutrition {
    /// "520 kcal | 30g protein | ..." or `None` when nothing is known
    pub fn summary_line(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.calories.map(|v| format!("{} kcal", trim_float(v))),
            self.protein_grams.map(|v| format!("{}g protein", trim_float(v))),
            self.fat_grams.map(|v| format!("{}g fat", trim_float(v))),
            self.carbohydrates_grams.map(|v| format!("{}g carbs", trim_float(v))),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!parts.is_empty()).then(|| parts.join(" | "))
    }
}

impl ShoppingPartition {
    /// Shopping list as plain text, used as the "copy shopping list" source
    pub fn shopping_list_text(&self) -> String {
        self.shopping_list
            .iter()
            .map(|item| format!("- {}", item.display_line()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ========================
// Built-in Sample
// ========================

/// Preview recipe shown in demo mode when the page carries no recipe
pub fn sample_recipe() -> Recipe {
    Recipe {
        title: "Delicious Chicken Curry".to_string(),
        description: "A rich and aromatic chicken curry that's easy to make.".to_string(),
        servings: Some("4".to_string()),
        prep_time: Some("15 minutes".to_string()),
        cook_time: Some("30 minutes".to_string()),
        ingredients: vec![
            Ingredient::new("Chicken Breast", "2", "lbs"),
            Ingredient::new("Onion", "1", ""),
            Ingredient::new("Garlic", "3", "cloves"),
            Ingredient::new("Ginger", "1", "inch"),
            Ingredient::new("Tomatoes", "14.5", "oz"),
            Ingredient::new("Coconut Milk", "13.5", "oz"),
            Ingredient::new("Curry Powder", "2", "tbsp"),
        ],
        steps: vec![
            "Cut chicken into bite-sized pieces.".to_string(),
            "Chop onion, garlic, and ginger.".to_string(),
            "Sauté onion, garlic, and ginger in a large pot.".to_string(),
            "Add chicken and cook until browned.".to_string(),
            "Stir in curry powder and cook for 1 minute.".to_string(),
            "Add tomatoes and coconut milk. Bring to a simmer.".to_string(),
            "Reduce heat and cook for 15-20 minutes, or until chicken is cooked through.".to_string(),
        ],
        ..Default::default()
    }
}

/// Partition matching `sample_recipe`
pub fn sample_partition() -> ShoppingPartition {
    ShoppingPartition {
        shopping_list: vec![
            ShoppingItem::new("Chicken Breast", "2", "lbs"),
            ShoppingItem::new("Coconut Milk", "13.5", "oz"),
        ],
        have_items: vec![
            ShoppingItem::new("Onion", "1", ""),
            ShoppingItem::new("Garlic", "3", "cloves"),
            ShoppingItem::new("Ginger", "1", "inch"),
            ShoppingItem::new("Tomatoes", "14.5", "oz"),
            ShoppingItem::new("Curry Powder", "2", "tbsp"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_recipe(n: usize, m: usize) -> Recipe {
        Recipe {
            title: "Test".to_string(),
            ingredients: (0..n)
                .map(|i| Ingredient::new(&format!("ing{}", i), &i.to_string(), "g"))
                .collect(),
            steps: (0..m).map(|i| format!("step {}", i)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lines_match_counts_and_order() {
        let recipe = make_recipe(4, 3);
        let ingredients = recipe.ingredient_lines();
        let steps = recipe.step_lines();

        assert_eq!(ingredients.len(), 4);
        assert_eq!(steps.len(), 3);
        assert_eq!(ingredients[0], "0 g ing0");
        assert_eq!(ingredients[3], "3 g ing3");
        assert_eq!(steps[0], "1. step 0");
        assert_eq!(steps[2], "3. step 2");
    }

    #[test]
    fn test_empty_parts_skipped() {
        assert_eq!(Ingredient::new("Onion", "1", "").display_line(), "1 Onion");
        assert_eq!(Ingredient::new("Salt", "", "").display_line(), "Salt");
    }

    #[test]
    fn test_shopping_item_accepts_ingredient_key() {
        let item: ShoppingItem =
            serde_json::from_str(r#"{"ingredient": "Rice", "quantity": "2 cups"}"#).unwrap();
        assert_eq!(item.name, "Rice");
        assert_eq!(item.unit, "");
        assert_eq!(item.display_line(), "2 cups Rice");
    }

    #[test]
    fn test_recipe_defaults_on_missing_fields() {
        let recipe: Recipe = serde_json::from_str(r#"{"title": "Toast"}"#).unwrap();
        assert_eq!(recipe.title, "Toast");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
        assert_eq!(recipe.servings, None);
    }

    const GENERATED_PAYLOAD: &str = r#"{
        "title": "Lemon Pasta",
        "summary": "Bright weeknight pasta.",
        "servings": 4,
        "estimated_time_minutes": 25,
        "cuisine": "Italian",
        "ingredients": [
            {"name": "Spaghetti", "quantity": "400", "unit": "g"},
            {"name": "Lemon", "quantity": 2, "unit": "", "note": "zested"},
            {"name": "Parmesan"}
        ],
        "steps": ["Boil pasta.", "Toss with lemon and cheese."],
        "nutrition": {"calories": 520, "protein_grams": 18.5},
        "tips": ["Save some pasta water."]
    }"#;

    #[test]
    fn test_generated_payload_deserializes() {
        let recipe: Recipe = serde_json::from_str(GENERATED_PAYLOAD).unwrap();

        assert_eq!(recipe.title, "Lemon Pasta");
        assert_eq!(recipe.description, "Bright weeknight pasta.");
        assert_eq!(recipe.servings.as_deref(), Some("4"));
        assert_eq!(recipe.estimated_time_minutes, Some(25));
        assert_eq!(recipe.cuisine.as_deref(), Some("Italian"));
        assert_eq!(recipe.ingredient_lines(), vec!["400 g Spaghetti", "2 Lemon (zested)", "Parmesan"]);
        assert_eq!(recipe.step_lines().len(), 2);
        assert_eq!(recipe.tips, vec!["Save some pasta water."]);
    }

    #[test]
    fn test_meta_and_nutrition_lines() {
        let recipe: Recipe = serde_json::from_str(GENERATED_PAYLOAD).unwrap();
        assert_eq!(
            recipe.meta_entries(),
            vec![
                ("Servings", "4".to_string()),
                ("Time", "25 min".to_string()),
                ("Cuisine", "Italian".to_string()),
            ]
        );

        let text = recipe.to_plain_text();
        assert!(text.contains("Servings: 4 | Time: 25 min | Cuisine: Italian"));
        assert!(text.contains("Tips\n- Save some pasta water."));
        assert!(text.contains("Nutrition: 520 kcal | 18.5g protein"));
    }

    #[test]
    fn test_string_servings_still_accepted() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"title": "Stew", "servings": "2 people", "description": "Hearty."}"#).unwrap();
        assert_eq!(recipe.servings.as_deref(), Some("2 people"));
        assert_eq!(recipe.description, "Hearty.");
        assert_eq!(recipe.nutrition, None);
    }

    #[test]
    fn test_shopping_item_from_ingredient_dict() {
        let item: ShoppingItem =
            serde_json::from_str(r#"{"name": "Lemon", "quantity": 2, "unit": "", "note": "zested"}"#).unwrap();
        assert_eq!(item.display_line(), "2 Lemon (zested)");
    }

    #[test]
    fn test_plain_text_contains_sections_in_order() {
        let text = sample_recipe().to_plain_text();
        let ingredients_at = text.find("Ingredients").unwrap();
        let instructions_at = text.find("Instructions").unwrap();
        assert!(text.starts_with("Delicious Chicken Curry"));
        assert!(ingredients_at < instructions_at);
        assert!(text.contains("- 2 lbs Chicken Breast"));
        assert!(text.contains("Servings: 4 | Prep: 15 minutes | Cook: 30 minutes"));
        assert!(text.contains("7. Reduce heat"));
    }

    #[test]
    fn test_shopping_list_text() {
        let text = sample_partition().shopping_list_text();
        assert_eq!(text, "- 2 lbs Chicken Breast\n- 13.5 oz Coconut Milk");
    }

    #[test]
    fn test_sample_partition_is_disjoint() {
        let partition = sample_partition();
        for have in &partition.have_items {
            assert!(partition.shopping_list.iter().all(|s| s.name != have.name));
        }
        let total = partition.shopping_list.len() + partition.have_items.len();
        assert_eq!(total, sample_recipe().ingredients.len());
    }
}
