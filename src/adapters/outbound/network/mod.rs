/// License list adapters: the pinned SPDX license-list-data release and the
/// offline table bundled with the `spdx` crate
mod bundled_license_list;
mod spdx_license_list_client;

pub use bundled_license_list::BundledLicenseList;
pub use spdx_license_list_client::{SpdxLicenseListClient, DEFAULT_LICENSE_LIST_VERSION};
