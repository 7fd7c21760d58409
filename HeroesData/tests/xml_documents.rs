use heroesdata::prelude::*;
use pretty_assertions::assert_eq;

const UNIT_XML: &[u8] = br#"<?xml version="1.0" encoding="utf-8"?>
<Units>
  <Unit id="HeroAbathur" hyperlinkId="Abathur" heroId="Abathur" name="Abathur">
    <speed>4.3984</speed>
    <life amount="685" scale="0.04" type="Life" regenRate="1.4257" regenScale="0.04"/>
    <weapons nameId="HeroAbathur" range="1" period="0.6" damage="26" damageScale="0.04"/>
    <weapons nameId="HeroAbathurSecondary" range="2" period="1" damage="10" damageScale="0"/>
  </Unit>
  <Unit id="AbathurLocustNormal" heroId="Abathur" name="Locust"/>
</Units>"#;

#[test]
fn test_xml_units() {
    let doc = StructuredDocument::parse_xml(UNIT_XML).unwrap();
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["HeroAbathur", "AbathurLocustNormal"]);

    let reader = UnitDataReader::new(doc);
    let unit = reader.get_by_hyperlink_id("Abathur").unwrap();
    assert_eq!(unit.id, "HeroAbathur");
    assert_eq!(unit.speed, 4.3984);
    assert_eq!(unit.life.life_max, 685.0);
    assert_eq!(unit.life.life_type.as_deref(), Some("Life"));

    let weapons: Vec<&str> = unit.weapons.iter().map(|w| w.weapon_name_id.as_str()).collect();
    assert_eq!(weapons, vec!["HeroAbathur", "HeroAbathurSecondary"]);

    let owned: Vec<String> = reader
        .units_for_hero("Abathur")
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(owned, vec!["HeroAbathur", "AbathurLocustNormal"]);
}

#[test]
fn test_xml_and_json_project_alike() {
    let json = br#"{"HeroAbathur": {"hyperlinkId": "Abathur", "heroId": "Abathur", "name": "Abathur", "speed": 4.3984}}"#;
    let xml = br#"<Units><Unit id="HeroAbathur" hyperlinkId="Abathur" heroId="Abathur" name="Abathur" speed="4.3984"/></Units>"#;

    let from_json = UnitDataReader::parse(json).unwrap().get_by_id("HeroAbathur").unwrap();
    let from_xml = UnitDataReader::new(StructuredDocument::parse_xml(xml).unwrap())
        .get_by_id("HeroAbathur")
        .unwrap();
    assert_eq!(from_json, from_xml);
}

#[test]
fn test_xml_lone_weapon_and_ability() {
    let xml = br#"<Units>
  <Unit id="HeroZagara" heroId="Zagara">
    <weapons nameId="HeroZagara" range="5.5" period="0.7" damage="68" damageScale="0.04"/>
    <abilities>
      <basic nameId="ZagaraBanelings" buttonId="ZagaraBanelings" abilityType="Q" isPassive="False"/>
    </abilities>
  </Unit>
</Units>"#;

    let reader = UnitDataReader::new(StructuredDocument::parse_xml(xml).unwrap());
    let unit = reader.get_by_id("HeroZagara").unwrap();

    assert_eq!(unit.weapons.len(), 1);
    assert_eq!(unit.weapons[0].weapon_name_id, "HeroZagara");
    assert_eq!(unit.weapons[0].damage, 68.0);

    assert_eq!(unit.abilities.len(), 1);
    assert_eq!(unit.abilities[0].tier, AbilityTier::Basic);
    assert_eq!(unit.abilities[0].id().to_string(), "ZagaraBanelings|ZagaraBanelings|Q|False");
}

#[test]
fn test_xml_lone_hero_unit_and_talent() {
    let xml = br#"<Heroes>
  <Hero id="Abathur" unitId="HeroAbathur">
    <talents>
      <level1 nameId="AbathurMasteryPressurizedGlands" buttonId="AbathurSpikeBurstPressurizedGlandsTalent" abilityType="W" sort="1"/>
    </talents>
    <heroUnits>
      <AbathurSymbiote unitId="HeroAbathurSymbiote" name="Symbiote"/>
    </heroUnits>
  </Hero>
</Heroes>"#;

    let reader = HeroDataReader::new(StructuredDocument::parse_xml(xml).unwrap());
    let hero = reader.get_by_id("Abathur").unwrap();

    assert_eq!(hero.talents.len(), 1);
    assert_eq!(hero.talents[0].tier, TalentTier::Level1);
    assert_eq!(hero.talents[0].column, 1);
    assert_eq!(hero.hero_units.len(), 1);
    assert_eq!(hero.hero_units[0].unit_id(), "HeroAbathurSymbiote");
}
