//! Naming convention utilities for generated files.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `PascalCase` | [`to_snake_case`] | `pascal_case` |
//! | `Structure` | [`file_name`] | `structure.rs` |
//! | `r#Type` | [`unraw`] | `Type` |

use crate::model::Structure;

/// Convert PascalCase or camelCase to snake_case.
///
/// A run of capitals is treated as one word, so acronyms stay together.
///
/// # Examples
///
/// ```
/// use jcegen_core::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("GetFriendListReq"), "get_friend_list_req");
/// assert_eq!(to_snake_case("SvcReqRegister"), "svc_req_register");
/// assert_eq!(to_snake_case("QQProfile"), "qq_profile");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let starts_word = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(_) => next.is_some_and(|n| n.is_lowercase()),
            };
            if starts_word {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// File names that already mean something to the module system.
pub const RESERVED_FILE_NAMES: &[&str] = &["lib.rs", "main.rs", "mod.rs"];

/// Strip the `r#` prefix of a raw identifier.
pub fn unraw(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}

/// Output file name for a structure.
///
/// `Mod`, `Lib` and `Main` map onto [`RESERVED_FILE_NAMES`]; callers writing
/// into a module directory should refuse those.
pub fn file_name(structure: &Structure) -> String {
    format!("{}.rs", to_snake_case(unraw(&structure.name)))
}
