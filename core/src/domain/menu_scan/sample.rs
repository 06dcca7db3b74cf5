use crate::domain::menu_scan::entities::{Dish, MenuScanResult, NutritionEstimate};

/// Known-good sample result served whenever the real pipeline cannot
/// produce valid output.
pub fn sample_menu() -> MenuScanResult {
    MenuScanResult {
        original: "Chinese".to_string(),
        dishes: vec![Dish {
            original: "宫保鸡丁".to_string(),
            english: "Kung Pao Chicken".to_string(),
            chinese: "宫保鸡丁".to_string(),
            japanese: "宮保鶏丁".to_string(),
            description: "经典川菜，鸡肉配花生与干辣椒".to_string(),
            description_english: "Classic Sichuan stir-fry of diced chicken with peanuts and dried chilies".to_string(),
            description_chinese: "经典川菜，鸡肉配花生与干辣椒".to_string(),
            description_japanese: "鶏肉とピーナッツ、唐辛子の定番四川炒め".to_string(),
            tags: vec!["spicy".to_string(), "meat".to_string(), "classic".to_string()],
            nutrition: NutritionEstimate {
                calories: Some(480),
                protein: Some(32),
                carbs: Some(24),
                fat: Some(28),
                sodium: Some(920),
                allergens: "Peanut, Soy".to_string(),
            },
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_menu_is_well_formed() {
        let sample = sample_menu();
        assert!(!sample.original.is_empty());
        assert_eq!(sample.dishes.len(), 1);
        assert!(!sample.dishes[0].description_english.is_empty());
    }
}
