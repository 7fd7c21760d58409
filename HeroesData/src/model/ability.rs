//! Abilities and talents

use std::fmt;

use serde::Serialize;

use super::enums::{AbilityTier, AbilityType, TalentTier};
use super::tooltip::TooltipDescription;

/// Composite identifier of an ability or talent.
///
/// Its [`Display`](fmt::Display) form, `referenceId|buttonId|abilityType|isPassive`
/// with the flag written `True`/`False`, is the key game strings are stored
/// under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct AbilityTalentId {
    pub reference_id: String,
    pub button_id: String,
    pub ability_type: AbilityType,
    pub is_passive: bool,
}

impl AbilityTalentId {
    pub fn new(
        reference_id: impl Into<String>,
        button_id: impl Into<String>,
        ability_type: AbilityType,
        is_passive: bool,
    ) -> Self {
        Self {
            reference_id: reference_id.into(),
            button_id: button_id.into(),
            ability_type,
            is_passive,
        }
    }

    /// Parse a `|`-separated key of up to four tokens.
    ///
    /// Fewer than two tokens yields `None`. Missing trailing tokens leave
    /// the ability type `Unknown` and the passive flag unset.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let mut tokens = key.splitn(4, '|');
        let reference_id = tokens.next()?;
        let button_id = tokens.next()?;
        let ability_type = AbilityType::parse_opt(tokens.next());
        let is_passive = tokens.next().is_some_and(|t| t.eq_ignore_ascii_case("true"));

        Some(Self::new(reference_id, button_id, ability_type, is_passive))
    }

    /// The game strings key.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AbilityTalentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.reference_id,
            self.button_id,
            self.ability_type,
            if self.is_passive { "True" } else { "False" }
        )
    }
}

/// Charge settings of an ability.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TooltipCharges {
    pub count_max: Option<i32>,
    pub count_use: Option<i32>,
    pub count_start: Option<i32>,
    pub is_hide_count: Option<bool>,
    pub recast_cooldown: Option<f64>,
}

impl TooltipCharges {
    #[must_use]
    pub fn has_charges(&self) -> bool {
        self.count_max.is_some()
    }
}

/// The texts and costs shown on an ability or talent tooltip.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AbilityTalentTooltip {
    pub short: Option<TooltipDescription>,
    pub full: Option<TooltipDescription>,
    pub cooldown: Option<TooltipDescription>,
    pub energy: Option<TooltipDescription>,
    pub life: Option<TooltipDescription>,
    pub toggle_cooldown: Option<f64>,
    pub charges: TooltipCharges,
}

/// Fields shared by abilities and talents.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AbilityTalentInfo {
    pub id: AbilityTalentId,
    pub name: Option<String>,
    pub icon_file_name: Option<String>,
    pub is_active: bool,
    pub is_quest: bool,
    pub tooltip: AbilityTalentTooltip,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Ability {
    pub info: AbilityTalentInfo,
    pub tier: AbilityTier,
    /// Set for sub-abilities: the ability whose button opens this one.
    pub parent_link: Option<AbilityTalentId>,
}

impl Ability {
    #[must_use]
    pub fn id(&self) -> &AbilityTalentId {
        &self.info.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    #[must_use]
    pub fn is_sub_ability(&self) -> bool {
        self.parent_link.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Talent {
    pub info: AbilityTalentInfo,
    pub tier: TalentTier,
    /// Position within the tier, from 1.
    pub column: i32,
    pub ability_talent_link_ids: Vec<String>,
    pub prerequisite_talent_ids: Vec<String>,
}

impl Talent {
    #[must_use]
    pub fn id(&self) -> &AbilityTalentId {
        &self.info.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }
}
