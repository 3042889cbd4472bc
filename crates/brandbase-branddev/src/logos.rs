//! Logo key derivation: raw `type` × `mode` entries into the canonical flat
//! `"{type}_{mode}"` mapping.

use std::collections::BTreeMap;

use crate::types::RawLogo;

/// Derive the canonical logo mapping from raw provider entries.
///
/// `type` defaults to `"logo"` and `mode` to `"dark"` when absent or empty.
/// The provider's `"has_opaque_background"` mode means the asset sits on a
/// baked-in solid background, which renders safely on dark UI, so it is
/// rewritten to `"dark"` before key construction. Entries without a URL are
/// dropped; a later entry under the same key wins.
#[must_use]
pub fn derive_logos(raw: &[RawLogo]) -> BTreeMap<String, String> {
    let mut logos = BTreeMap::new();

    for logo in raw {
        let Some(url) = logo.url.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };

        let kind = logo
            .kind
            .as_deref()
            .filter(|k| !k.is_empty())
            .unwrap_or("logo");

        let mode = match logo.mode.as_deref().filter(|m| !m.is_empty()) {
            None | Some("has_opaque_background") => "dark",
            Some(mode) => mode,
        };

        logos.insert(format!("{kind}_{mode}"), url.to_owned());
    }

    logos
}
