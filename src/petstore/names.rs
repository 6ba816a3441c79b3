//! Pet names for generated payloads

const FIRST_NAMES: &[&str] = &[
    "Bella", "Max", "Luna", "Charlie", "Lucy", "Cooper", "Daisy", "Milo", "Rosie", "Oscar",
    "Molly", "Teddy", "Stella", "Bailey", "Ruby", "Finn", "Nala", "Jasper", "Willow", "Ollie",
];

/// Where step handlers get pet names from
#[derive(Debug, Clone, Default)]
pub enum NameSource {
    /// Pick from a built-in pool, keyed by the pet id
    #[default]
    Pool,
    /// Always use the same name
    Fixed(String),
}

impl NameSource {
    pub fn name_for(&self, pet_id: i64) -> String {
        match self {
            NameSource::Pool => {
                let index = pet_id.rem_euclid(FIRST_NAMES.len() as i64) as usize;
                FIRST_NAMES[index].to_string()
            }
            NameSource::Fixed(name) => name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_names_are_stable_per_id() {
        let names = NameSource::Pool;
        assert_eq!(names.name_for(1_700_000_000_000), names.name_for(1_700_000_000_000));
        assert!(!names.name_for(-3).is_empty());
    }

    #[test]
    fn test_fixed_name() {
        assert_eq!(NameSource::Fixed("Rex".into()).name_for(12), "Rex");
    }
}
