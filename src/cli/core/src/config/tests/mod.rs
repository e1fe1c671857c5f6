/* src/cli/core/src/config/tests/mod.rs */

use super::*;

mod discovery;
mod parsing;

pub(super) const MINIMAL: &str = r#"
[site]
name = "Acme"
base_url = "https://acme.test"

[i18n]
locales = ["en", "fr"]
default = "en"

[organization]
name = "Acme Studio"
logo = "https://acme.test/logo.png"
knows_about = ["web design"]

[organization.address]
street_address = "1 Main St"
locality = "Springfield"
postal_code = "12345"
country = "US"
"#;
