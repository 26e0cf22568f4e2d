//! Directory source abstraction.
//!
//! [`DirectorySource`] is the one operation the search layer needs from
//! storage: hand over every record. Keeping it a trait lets
//! [`DirectorySearch`](crate::search::DirectorySearch) load from the JSON file
//! in production and from fixed vectors in tests.

use crate::domain::error::Result;
use crate::domain::Doctor;

/// Anything that can list the full doctor directory.
///
/// # Examples
///
/// ```no_run
/// use doctor_locator::storage::{DirectorySource, JsonDirectory};
///
/// let directory = JsonDirectory::open("/srv/locator/doctors.json")?;
/// let doctors = directory.load_doctors()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait DirectorySource {
    /// Returns every record in directory order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read.
    fn load_doctors(&self) -> Result<Vec<Doctor>>;
}

impl DirectorySource for Vec<Doctor> {
    fn load_doctors(&self) -> Result<Vec<Doctor>> {
        Ok(self.clone())
    }
}
