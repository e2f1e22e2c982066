//! In-process adapters for every driven port.
//!
//! [`MemoryStore`] keeps all state behind one mutex, so each port call is
//! atomic with respect to every other call on the same store. It backs the
//! server when no database is configured and gives the test suites a real
//! implementation to drive end to end.

mod accounts;
mod events;
mod pages;

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};

use crate::domain::{
    CleaningServicePage, ContactMessage, Event, EventId, EventsPageSettings, MissionPage,
    Registration, SiteText, StoredCredentials, TranslationEntry, UserId, VolunteerGroup,
    VolunteerRole,
};

#[derive(Debug, Clone)]
struct Membership {
    user: UserId,
    group_id: i64,
    role: VolunteerRole,
    added_at: DateTime<Utc>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    users: Vec<StoredCredentials>,
    tokens: HashMap<String, UserId>,
    events: BTreeMap<EventId, Event>,
    registrations: Vec<Registration>,
    mission: Option<MissionPage>,
    cleaning_service: Option<CleaningServicePage>,
    events_page: Option<EventsPageSettings>,
    translations: Vec<TranslationEntry>,
    site_text: Option<SiteText>,
    contacts: Vec<ContactMessage>,
    groups: Vec<(VolunteerGroup, bool)>,
    memberships: Vec<Membership>,
}

impl State {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory store implementing every repository port.
///
/// Cloning yields another handle onto the same state.
///
/// # Examples
/// ```
/// use bijou_backend::domain::MissionPage;
/// use bijou_backend::outbound::memory::MemoryStore;
///
/// let store = MemoryStore::new();
/// store.set_mission(MissionPage::builtin());
/// ```
#[derive(Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
    clock: Arc<dyn Clock>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Create an empty store stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            clock,
        }
    }

    // Every mutation completes before the guard drops, so a poisoned lock
    // still guards consistent state.
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Clock stamping this store's records.
    #[must_use]
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Insert or replace an event under its own id.
    pub fn insert_event(&self, event: Event) {
        let mut state = self.state();
        state.next_id = state.next_id.max(event.id.get());
        state.events.insert(event.id, event);
    }

    /// Remove an event together with its registrations.
    pub fn remove_event(&self, id: EventId) {
        let mut state = self.state();
        state.events.remove(&id);
        state.registrations.retain(|r| r.event_id != id);
    }

    /// Store the mission page.
    pub fn set_mission(&self, page: MissionPage) {
        self.state().mission = Some(page);
    }

    /// Store the cleaning service page.
    pub fn set_cleaning_service(&self, page: CleaningServicePage) {
        self.state().cleaning_service = Some(page);
    }

    /// Store the events page settings.
    pub fn set_events_page(&self, page: EventsPageSettings) {
        self.state().events_page = Some(page);
    }

    /// Insert a translation row, replacing any row with the same
    /// `(namespace, key, language)`.
    pub fn upsert_translation(&self, entry: TranslationEntry) {
        let mut state = self.state();
        state.translations.retain(|row| {
            (row.namespace.as_str(), row.key.as_str(), row.language.as_str())
                != (
                    entry.namespace.as_str(),
                    entry.key.as_str(),
                    entry.language.as_str(),
                )
        });
        state.translations.push(entry);
    }

    /// Store the site text labels.
    pub fn set_site_text(&self, site_text: SiteText) {
        self.state().site_text = Some(site_text);
    }

    /// Add a volunteer group, returning its id.
    pub fn add_volunteer_group(
        &self,
        name: &str,
        description: &str,
        logo: Option<&str>,
        active: bool,
    ) -> i64 {
        let mut state = self.state();
        let id = state.allocate_id();
        state.groups.push((
            VolunteerGroup {
                id,
                name: name.to_owned(),
                description: description.to_owned(),
                logo: logo.map(str::to_owned),
            },
            active,
        ));
        id
    }

    /// Assign `user` to a volunteer group, replacing an earlier assignment.
    pub fn add_membership(&self, user: UserId, group_id: i64, role: VolunteerRole) {
        let added_at = self.now();
        let mut state = self.state();
        state
            .memberships
            .retain(|m| !(m.user == user && m.group_id == group_id));
        state.memberships.push(Membership {
            user,
            group_id,
            role,
            added_at,
        });
    }

    /// Contact messages received so far, oldest first.
    #[must_use]
    pub fn contact_messages(&self) -> Vec<ContactMessage> {
        self.state().contacts.clone()
    }
}
