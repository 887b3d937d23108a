// SPDX-FileCopyrightText: 2025-2026 The Medcamp Authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::route::ADMIN_LOGIN_PATH;

/// Terminal, non-erroring outcome for a path outside the URL surface.
pub(crate) fn render(path: &str) {
    println!(r#"There is no page at "{path}"."#);
    println!("If you are looking for the administration area, start at {ADMIN_LOGIN_PATH}.");
}
