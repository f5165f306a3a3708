pub mod content;
pub mod field;
pub mod lyapunov;
pub mod perturbation;
pub mod solvers;
pub mod stability;
pub mod system;
pub mod trajectory;
/// The `phaselab_core` crate is the computation engine behind the phaselab
/// stability dashboard. Every operation is a pure function of the two
/// coefficients (a1, a2) of ẋ = y, ẏ = a1·x + a2·y plus an initial state:
/// nothing is cached and nothing persists between calls.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `DynamicalSystem` (right-hand sides), `Steppable` (solvers).
/// - **System**: the two-coefficient plant, slider clamping, scenario presets.
/// - **Field / Trajectory / Perturbation / Lyapunov**: the four plot producers.
/// - **Stability**: eigenvalue classification and separation-trend diagnosis.
/// - **Content**: immutable quiz and help data for the educational panels.
pub mod traits;
