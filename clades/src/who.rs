use std::str::FromStr;

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Greek-letter labels handed out by the WHO to variants of concern
#[rustfmt::skip]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Display, EnumString, EnumCount, EnumIter)]
pub enum WhoVariant {
    #[strum(serialize="Alpha")]       Alpha,
    #[strum(serialize="Beta")]        Beta,
    #[strum(serialize="Gamma")]       Gamma,
    #[strum(serialize="Delta")]       Delta,
    #[strum(serialize="Epsilon")]     Epsilon,
    #[strum(serialize="Zeta")]        Zeta,
    #[strum(serialize="Eta")]         Eta,
    #[strum(serialize="Theta")]       Theta,
    #[strum(serialize="Iota")]        Iota,
    #[strum(serialize="Kappa")]       Kappa,
    #[strum(serialize="Lambda")]      Lambda,
    #[strum(serialize="Mu")]          Mu,
    #[strum(serialize="Nu")]          Nu,
    #[strum(serialize="Xi")]          Xi,
    #[strum(serialize="Omicron")]     Omicron,
    #[strum(serialize="Pi")]          Pi,
    #[strum(serialize="Rho")]         Rho,
    #[strum(serialize="Sigma")]       Sigma,
    #[strum(serialize="Tau")]         Tau,
    #[strum(serialize="Upsilon")]     Upsilon,
    #[strum(serialize="Phi")]         Phi,
    #[strum(serialize="Chi")]         Chi,
    #[strum(serialize="Psi")]         Psi,
    #[strum(serialize="Omega")]       Omega,
}

impl WhoVariant {
    /// Parse a name component, `None` when it is not a WHO label
    pub fn parse(component: &str) -> Option<Self> {
        WhoVariant::from_str(component).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn every_variant_round_trips_through_its_name() {
        assert_eq!(WhoVariant::COUNT, 24);
        for variant in WhoVariant::iter() {
            assert_eq!(WhoVariant::parse(&variant.to_string()), Some(variant));
        }
    }

    #[test]
    fn lineages_and_regional_names_are_not_who_labels() {
        assert_eq!(WhoVariant::parse("EU1"), None);
        assert_eq!(WhoVariant::parse("B.1.1.7"), None);
        assert_eq!(WhoVariant::parse("omicron"), None);
    }
}
