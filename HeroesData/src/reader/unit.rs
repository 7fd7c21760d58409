//! Unit lookups

use super::DataReader;
use crate::error::Result;
use crate::model::Unit;

impl DataReader<Unit> {
    /// Every unit that belongs to `hero_id`, in source order.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an
    /// empty id, or a projection error.
    pub fn units_for_hero(&self, hero_id: &str) -> Result<Vec<Unit>> {
        self.all_by_hero_id(hero_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::reader::UnitDataReader;

    const UNITS: &[u8] = br#"{
        "HeroAbathur": {"heroId": "Abathur", "name": "Abathur"},
        "AbathurLocustNormal": {"heroId": "Abathur", "name": "Locust"},
        "HeroAlarak": {"heroId": "Alarak"},
        "TownCannonTower": {"name": "Cannon Tower"}
    }"#;

    #[test]
    fn test_get_by_hero_id_is_first_match() {
        let reader = UnitDataReader::parse(UNITS).unwrap();
        assert_eq!(reader.get_by_hero_id("Abathur").unwrap().id, "HeroAbathur");
        assert!(reader.try_get_by_hero_id("Zagara").unwrap().is_none());
    }

    #[test]
    fn test_units_for_hero() {
        let reader = UnitDataReader::parse(UNITS).unwrap();
        let ids: Vec<String> = reader
            .units_for_hero("Abathur")
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec!["HeroAbathur", "AbathurLocustNormal"]);
        assert!(reader.units_for_hero("Zagara").unwrap().is_empty());
        assert!(reader.units_for_hero("").is_err());
    }
}
