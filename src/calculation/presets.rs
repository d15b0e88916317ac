//! Legal-matter preset application.
//!
//! Selecting a matter from the preset table overwrites the session's day
//! count and rule with the statutory values. An unknown name (including the
//! empty "no selection" sentinel) is a silent no-op: current selections and
//! the session's calendar are preserved.

use crate::config::{ConfigLoader, LegalMatter};
use crate::models::CalculationSession;

/// Applies a legal-matter preset to a session.
///
/// # Arguments
///
/// * `session` - The session whose day count and rule are overwritten
/// * `matter_name` - The exact preset name, e.g. "Apelación en juicio civil"
/// * `config` - The loaded preset table
///
/// # Returns
///
/// The matched matter, or `None` when the name is unknown - in which case
/// the session is left untouched. Preset application never mutates the
/// session's custom holidays or excluded dates.
///
/// # Example
///
/// ```
/// use toolbox_engine::calculation::apply_preset;
/// use toolbox_engine::config::ConfigLoader;
/// use toolbox_engine::models::DayCountRule;
///
/// let config = ConfigLoader::embedded();
/// let mut session = config.new_session();
/// session.set_day_count(3);
///
/// apply_preset(&mut session, "Apelación en juicio civil", &config).unwrap();
/// assert_eq!(session.day_count(), Some(10));
/// assert_eq!(session.rule(), DayCountRule::Business);
/// ```
pub fn apply_preset<'a>(
    session: &mut CalculationSession,
    matter_name: &str,
    config: &'a ConfigLoader,
) -> Option<&'a LegalMatter> {
    let matter = config.find_matter(matter_name)?;
    session.set_day_count(matter.days);
    session.set_rule(matter.rule);
    Some(matter)
}
