use crate::system::LinearSystem;
use anyhow::{bail, Result};
use nalgebra::Matrix2;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

/// Tolerance for treating a trace/determinant/discriminant as zero when
/// binning into a qualitative class. Slider inputs arrive in 0.1 steps, so
/// anything below this is a deliberate exact value, not noise.
const ZERO_TOL: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexNumber {
    pub re: f64,
    pub im: f64,
}

impl From<Complex<f64>> for ComplexNumber {
    fn from(value: Complex<f64>) -> Self {
        Self {
            re: value.re,
            im: value.im,
        }
    }
}

/// Qualitative type of the equilibrium at the origin, the standard
/// trace/determinant taxonomy of 2D linear flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityClass {
    StableNode,
    StableFocus,
    Center,
    UnstableNode,
    UnstableFocus,
    Saddle,
    /// Zero eigenvalue (a1 = 0): a line of equilibria rather than an
    /// isolated point.
    Degenerate,
}

impl StabilityClass {
    /// True when every trajectory converges to the origin.
    pub fn is_asymptotically_stable(self) -> bool {
        matches!(self, StabilityClass::StableNode | StabilityClass::StableFocus)
    }

    pub fn is_unstable(self) -> bool {
        matches!(
            self,
            StabilityClass::UnstableNode | StabilityClass::UnstableFocus | StabilityClass::Saddle
        )
    }
}

/// Damping regime of the restoring (a1 < 0) case, binned by the sign of
/// Δ = a2² + 4·a1. This is the door-closer story: underdamped slams,
/// overdamped crawls, critical is the tuning target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DampingRegime {
    Underdamped,
    CriticallyDamped,
    Overdamped,
}

/// Eigenvalue diagnosis of the companion matrix [[0, 1], [a1, a2]],
/// shipped whole to the UI so the explanation panel can quote eigenvalues,
/// discriminant, and class together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    pub eigenvalues: [ComplexNumber; 2],
    pub trace: f64,
    pub determinant: f64,
    pub discriminant: f64,
    pub class: StabilityClass,
    pub damping: Option<DampingRegime>,
}

/// Classifies the origin of ẋ = y, ẏ = a1·x + a2·y.
///
/// Real parts all negative ⇒ asymptotically stable, any positive ⇒
/// unstable, purely imaginary pair ⇒ center (marginal). Node versus focus
/// follows the discriminant sign.
pub fn classify(system: &LinearSystem) -> StabilityReport {
    let matrix = Matrix2::new(0.0, 1.0, system.a1, system.a2);
    let eigenvalues = matrix.complex_eigenvalues();

    let trace = system.trace();
    let determinant = system.determinant();
    let discriminant = system.discriminant();

    let class = if determinant.abs() <= ZERO_TOL {
        StabilityClass::Degenerate
    } else if determinant < 0.0 {
        StabilityClass::Saddle
    } else if trace.abs() <= ZERO_TOL {
        StabilityClass::Center
    } else if trace < 0.0 {
        if discriminant < -ZERO_TOL {
            StabilityClass::StableFocus
        } else {
            StabilityClass::StableNode
        }
    } else if discriminant < -ZERO_TOL {
        StabilityClass::UnstableFocus
    } else {
        StabilityClass::UnstableNode
    };

    let damping = if system.a1 < -ZERO_TOL && system.a2 <= 0.0 {
        Some(if discriminant < -ZERO_TOL {
            DampingRegime::Underdamped
        } else if discriminant <= ZERO_TOL {
            DampingRegime::CriticallyDamped
        } else {
            DampingRegime::Overdamped
        })
    } else {
        None
    };

    StabilityReport {
        eigenvalues: [
            ComplexNumber::from(eigenvalues[0]),
            ComplexNumber::from(eigenvalues[1]),
        ],
        trace,
        determinant,
        discriminant,
        class,
        damping,
    }
}

/// Qualitative trend of a perturbation separation series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationTrend {
    Converging,
    Bounded,
    Diverging,
}

/// Bins the final/initial separation ratio: < 0.5 converging, > 2.0
/// diverging, bounded in between. The bands are wide because explicit Euler
/// inflates marginal orbits slightly and oscillatory decay can sit above
/// its envelope at the final sample.
pub fn separation_trend(distance: &[f64]) -> Result<SeparationTrend> {
    if distance.len() < 2 {
        bail!("Separation series needs at least two samples.");
    }
    let first = distance[0];
    if !(first > 0.0) {
        bail!("Initial separation must be positive.");
    }
    let last = distance[distance.len() - 1];

    let ratio = last / first;
    Ok(if ratio < 0.5 {
        SeparationTrend::Converging
    } else if ratio > 2.0 {
        SeparationTrend::Diverging
    } else {
        SeparationTrend::Bounded
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perturbation::perturbation;
    use crate::system::{Scenario, DEFAULT_DT, DEFAULT_EPS, DEFAULT_T_MAX};

    fn sorted_real_parts(report: &StabilityReport) -> (f64, f64) {
        let (a, b) = (report.eigenvalues[0].re, report.eigenvalues[1].re);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    #[test]
    fn damped_oscillator_is_a_stable_focus() {
        let report = classify(&LinearSystem::new(-1.0, -0.5));
        assert_eq!(report.class, StabilityClass::StableFocus);
        assert!(report.class.is_asymptotically_stable());
        assert_eq!(report.damping, Some(DampingRegime::Underdamped));

        // λ = -1/4 ± i·√3.75/2
        for eig in &report.eigenvalues {
            assert!((eig.re + 0.25).abs() < 1e-9);
            assert!((eig.im.abs() - 3.75_f64.sqrt() / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn undamped_oscillator_is_a_center() {
        let report = classify(&LinearSystem::new(-1.0, 0.0));
        assert_eq!(report.class, StabilityClass::Center);
        assert!(!report.class.is_asymptotically_stable());
        assert!(!report.class.is_unstable());
        for eig in &report.eigenvalues {
            assert!(eig.re.abs() < 1e-9);
            assert!((eig.im.abs() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn positive_a1_gives_a_saddle() {
        let report = classify(&LinearSystem::new(1.0, 0.0));
        assert_eq!(report.class, StabilityClass::Saddle);
        assert!(report.class.is_unstable());
        let (low, high) = sorted_real_parts(&report);
        assert!((low + 1.0).abs() < 1e-9);
        assert!((high - 1.0).abs() < 1e-9);
    }

    #[test]
    fn critical_door_closer_is_a_stable_node() {
        let report = classify(&Scenario::DoorCloser.system());
        assert_eq!(report.class, StabilityClass::StableNode);
        assert_eq!(report.damping, Some(DampingRegime::CriticallyDamped));
        assert!(report.discriminant.abs() <= 1e-12);
    }

    #[test]
    fn overdamped_spring_is_a_stable_node() {
        let report = classify(&LinearSystem::new(-1.0, -3.0));
        assert_eq!(report.class, StabilityClass::StableNode);
        assert_eq!(report.damping, Some(DampingRegime::Overdamped));
    }

    #[test]
    fn negative_damping_gives_an_unstable_focus() {
        let report = classify(&LinearSystem::new(-1.0, 0.5));
        assert_eq!(report.class, StabilityClass::UnstableFocus);
        assert_eq!(report.damping, None);
    }

    #[test]
    fn zero_a1_is_degenerate() {
        let report = classify(&LinearSystem::new(0.0, -1.0));
        assert_eq!(report.class, StabilityClass::Degenerate);
    }

    #[test]
    fn separation_trend_bins_ratio() {
        assert_eq!(
            separation_trend(&[1.0, 0.8, 0.2]).expect("trend"),
            SeparationTrend::Converging
        );
        assert_eq!(
            separation_trend(&[1.0, 1.2, 1.1]).expect("trend"),
            SeparationTrend::Bounded
        );
        assert_eq!(
            separation_trend(&[1.0, 4.0, 9.0]).expect("trend"),
            SeparationTrend::Diverging
        );
        assert!(separation_trend(&[1.0]).is_err());
        assert!(separation_trend(&[0.0, 1.0]).is_err());
    }

    #[test]
    fn trend_agrees_with_classification_on_the_three_regimes() {
        let cases = [
            (LinearSystem::new(-1.0, -1.0), SeparationTrend::Converging),
            (LinearSystem::new(-1.0, 0.0), SeparationTrend::Bounded),
            (LinearSystem::new(1.0, 0.0), SeparationTrend::Diverging),
        ];
        for (system, expected) in cases {
            let analysis =
                perturbation(&system, 1.0, 0.0, DEFAULT_EPS, DEFAULT_T_MAX, DEFAULT_DT)
                    .expect("analysis");
            let trend = separation_trend(&analysis.distance).expect("trend");
            assert_eq!(trend, expected, "for {system:?}");
        }
    }
}
