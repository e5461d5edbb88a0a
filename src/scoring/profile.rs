use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Coefficients applied to (market share, CAGR, penetration).
///
/// Expected to sum to 1.0 but not required to; the index is never renormalised.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weights {
	/// Market share coefficient.
	pub share: f64,
	/// Growth coefficient.
	pub cagr: f64,
	/// Industry penetration coefficient.
	pub penetration: f64,
}

impl Weights {
	/// Build a custom weight triple. Checked when it is applied, not here.
	pub const fn new(share: f64, cagr: f64, penetration: f64) -> Self {
		Self {
			share,
			cagr,
			penetration,
		}
	}

	/// Sum of the three coefficients.
	pub fn total(&self) -> f64 {
		self.share + self.cagr + self.penetration
	}

	/// Reject negative or non-finite coefficients.
	pub fn validate(&self) -> Result<()> {
		for (component, value) in [
			("w_share", self.share),
			("w_cagr", self.cagr),
			("w_penetration", self.penetration),
		] {
			if !value.is_finite() || value < 0.0 {
				return Err(DashboardError::InvalidProfile { component, value });
			}
		}
		Ok(())
	}
}

/// Named weighting models offered to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightingProfile {
	/// 40/40/20.
	#[default]
	Balanced,
	/// 30/50/20, favours growth.
	Growth,
	/// 50/30/20, favours market dominance.
	Market,
}

impl WeightingProfile {
	/// Every profile, in selector order.
	pub const ALL: [WeightingProfile; 3] = [
		WeightingProfile::Balanced,
		WeightingProfile::Growth,
		WeightingProfile::Market,
	];

	/// Coefficients for this model.
	pub const fn weights(self) -> Weights {
		match self {
			WeightingProfile::Balanced => Weights::new(0.4, 0.4, 0.2),
			WeightingProfile::Growth => Weights::new(0.3, 0.5, 0.2),
			WeightingProfile::Market => Weights::new(0.5, 0.3, 0.2),
		}
	}

	/// Stable key, as accepted by [`FromStr`].
	pub const fn key(self) -> &'static str {
		match self {
			WeightingProfile::Balanced => "balanced",
			WeightingProfile::Growth => "growth",
			WeightingProfile::Market => "market",
		}
	}

	/// Human readable option text.
	pub const fn label(self) -> &'static str {
		match self {
			WeightingProfile::Balanced => "Balanced (40/40/20)",
			WeightingProfile::Growth => "Growth Focused (30/50/20)",
			WeightingProfile::Market => "Market Dominance (50/30/20)",
		}
	}
}

impl From<WeightingProfile> for Weights {
	fn from(profile: WeightingProfile) -> Self {
		profile.weights()
	}
}

impl FromStr for WeightingProfile {
	type Err = DashboardError;

	fn from_str(s: &str) -> Result<Self> {
		let key = s.trim();
		WeightingProfile::ALL
			.into_iter()
			.find(|profile| profile.key().eq_ignore_ascii_case(key))
			.ok_or_else(|| DashboardError::UnknownProfile(s.to_owned()))
	}
}

impl fmt::Display for WeightingProfile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_known_keys() {
		assert_eq!("growth".parse::<WeightingProfile>(), Ok(WeightingProfile::Growth));
		assert_eq!(" Market ".parse::<WeightingProfile>(), Ok(WeightingProfile::Market));
		for profile in WeightingProfile::ALL {
			assert_eq!(profile.key().parse::<WeightingProfile>(), Ok(profile));
		}
	}

	#[test]
	fn rejects_unknown_key_instead_of_defaulting() {
		assert_eq!(
			"aggressive".parse::<WeightingProfile>(),
			Err(DashboardError::UnknownProfile("aggressive".into()))
		);
	}

	#[test]
	fn builtin_weights_sum_to_one() {
		for profile in WeightingProfile::ALL {
			assert!((profile.weights().total() - 1.0).abs() < 1e-12, "{profile}");
		}
	}

	#[test]
	fn negative_and_nan_weights_are_invalid() {
		assert_eq!(
			Weights::new(0.5, -0.1, 0.6).validate(),
			Err(DashboardError::InvalidProfile {
				component: "w_cagr",
				value: -0.1
			})
		);
		assert!(Weights::new(f64::NAN, 0.5, 0.5).validate().is_err());
		assert!(Weights::new(0.0, 0.0, 0.0).validate().is_ok());
	}
}
