//! Subject demographics and the darkness-body reference mewa per class.
//!
//! Classification precedence: age bands first (under 9, 9 to 18, 60 and
//! over), then the official profession, then gender-specific professions.
//! Monastic and lay-practitioner classes only apply to males; sex worker
//! only applies to females.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use mewa_base::MewaError;

/// Youngest accepted age.
pub const AGE_MIN: i32 = 0;
/// Oldest accepted age.
pub const AGE_MAX: i32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

pub const ALL_GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];

impl Gender {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Gender {
    type Err = MewaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ALL_GENDERS
            .into_iter()
            .find(|g| g.key() == key)
            .ok_or_else(|| MewaError::unknown_key("gender", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profession {
    #[default]
    General,
    Official,
    Monastic,
    LayPractitioner,
    SexWorker,
}

pub const ALL_PROFESSIONS: [Profession; 5] = [
    Profession::General,
    Profession::Official,
    Profession::Monastic,
    Profession::LayPractitioner,
    Profession::SexWorker,
];

impl Profession {
    pub const fn key(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Official => "official",
            Self::Monastic => "monastic",
            Self::LayPractitioner => "lay_practitioner",
            Self::SexWorker => "sex_worker",
        }
    }
}

impl Display for Profession {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Profession {
    type Err = MewaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        ALL_PROFESSIONS
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| MewaError::unknown_key("profession", s))
    }
}

/// The nine demographic classes used by the regional obstacle rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemographicClass {
    Under9,
    Age9To18,
    MaleGeneral,
    SexWorker,
    Monastic,
    LayPractitioner,
    FemaleGeneral,
    Official,
    Elderly,
}

pub const ALL_DEMOGRAPHIC_CLASSES: [DemographicClass; 9] = [
    DemographicClass::Under9,
    DemographicClass::Age9To18,
    DemographicClass::MaleGeneral,
    DemographicClass::SexWorker,
    DemographicClass::Monastic,
    DemographicClass::LayPractitioner,
    DemographicClass::FemaleGeneral,
    DemographicClass::Official,
    DemographicClass::Elderly,
];

impl DemographicClass {
    /// Classify a subject. Fails with `OutOfRange("age")` outside
    /// [`AGE_MIN`]..=[`AGE_MAX`].
    pub fn classify(
        age: i32,
        gender: Gender,
        profession: Profession,
    ) -> Result<Self, MewaError> {
        MewaError::check_range(
            "age",
            i64::from(age),
            i64::from(AGE_MIN),
            i64::from(AGE_MAX),
        )?;

        let class = match age {
            ..9 => Self::Under9,
            9..=18 => Self::Age9To18,
            60.. => Self::Elderly,
            _ if profession == Profession::Official => Self::Official,
            _ => match (gender, profession) {
                (Gender::Female, Profession::SexWorker) => Self::SexWorker,
                (Gender::Female, _) => Self::FemaleGeneral,
                (Gender::Male, Profession::Monastic) => Self::Monastic,
                (Gender::Male, Profession::LayPractitioner) => Self::LayPractitioner,
                (Gender::Male, _) => Self::MaleGeneral,
            },
        };
        Ok(class)
    }

    /// Darkness-body mewa number for the class.
    pub const fn reference_mewa(self) -> u8 {
        match self {
            Self::Under9 => 1,
            Self::MaleGeneral => 2,
            Self::Age9To18 => 3,
            Self::SexWorker => 4,
            Self::Monastic => 5,
            Self::LayPractitioner => 6,
            Self::FemaleGeneral => 7,
            Self::Official => 8,
            Self::Elderly => 9,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under9 => "under 9",
            Self::Age9To18 => "9 to 18",
            Self::MaleGeneral => "male 19 and over",
            Self::SexWorker => "sex worker 19 and over",
            Self::Monastic => "monastic 19 and over",
            Self::LayPractitioner => "lay practitioner 19 and over",
            Self::FemaleGeneral => "female 19 and over",
            Self::Official => "official 19 and over",
            Self::Elderly => "elderly 60 and over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(age: i32, g: Gender, p: Profession) -> DemographicClass {
        DemographicClass::classify(age, g, p).unwrap()
    }

    #[test]
    fn age_bands_dominate() {
        use Profession::*;
        assert_eq!(class(0, Gender::Male, Official), DemographicClass::Under9);
        assert_eq!(class(8, Gender::Female, SexWorker), DemographicClass::Under9);
        assert_eq!(class(9, Gender::Male, Monastic), DemographicClass::Age9To18);
        assert_eq!(class(18, Gender::Female, General), DemographicClass::Age9To18);
        assert_eq!(class(60, Gender::Male, Official), DemographicClass::Elderly);
        assert_eq!(class(150, Gender::Female, General), DemographicClass::Elderly);
    }

    #[test]
    fn official_before_gender() {
        assert_eq!(
            class(30, Gender::Female, Profession::Official),
            DemographicClass::Official
        );
        assert_eq!(
            class(19, Gender::Male, Profession::Official),
            DemographicClass::Official
        );
    }

    #[test]
    fn female_professions() {
        assert_eq!(
            class(25, Gender::Female, Profession::SexWorker),
            DemographicClass::SexWorker
        );
        // Monastic only distinguishes males.
        assert_eq!(
            class(25, Gender::Female, Profession::Monastic),
            DemographicClass::FemaleGeneral
        );
    }

    #[test]
    fn male_professions() {
        assert_eq!(
            class(40, Gender::Male, Profession::Monastic),
            DemographicClass::Monastic
        );
        assert_eq!(
            class(40, Gender::Male, Profession::LayPractitioner),
            DemographicClass::LayPractitioner
        );
        assert_eq!(
            class(40, Gender::Male, Profession::SexWorker),
            DemographicClass::MaleGeneral
        );
        assert_eq!(
            class(59, Gender::Male, Profession::General),
            DemographicClass::MaleGeneral
        );
    }

    #[test]
    fn reference_numbers_are_a_permutation() {
        let mut nums: Vec<u8> = ALL_DEMOGRAPHIC_CLASSES
            .iter()
            .map(|c| c.reference_mewa())
            .collect();
        nums.sort_unstable();
        assert_eq!(nums, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn age_out_of_range() {
        for age in [-1, 151] {
            assert!(matches!(
                DemographicClass::classify(age, Gender::Male, Profession::General),
                Err(MewaError::OutOfRange { field: "age", .. })
            ));
        }
    }

    #[test]
    fn parse_keys() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
        assert_eq!(
            "lay-practitioner".parse::<Profession>().unwrap(),
            Profession::LayPractitioner
        );
        assert_eq!("sex_worker".parse::<Profession>().unwrap(), Profession::SexWorker);
        assert!(matches!(
            "farmer".parse::<Profession>(),
            Err(MewaError::UnknownKey { kind: "profession", .. })
        ));
    }
}
