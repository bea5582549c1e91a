use serde::{Deserialize, Serialize};

/// The lead-capture form payload, inserted into `contact_submissions`.
///
/// Constructed entirely client side and never read back. `phone` and
/// `preferred_program` are optional on the form but always travel as
/// strings, empty when unset. `Default` is the all-empty draft the form
/// starts from and resets to after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub preferred_program: String,
}
