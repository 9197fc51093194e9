//! External authority clients producing normalized trust verdicts.

mod siren;

pub use siren::{AuthorityError, SirenApiClient};
