//! Page documents, translations, contact intake and volunteer groups.

use async_trait::async_trait;

use super::MemoryStore;
use crate::domain::ports::{
    ContactRepository, ContactRepositoryError, ContentRepository, ContentRepositoryError,
    TranslationRepository, TranslationRepositoryError, VolunteerRepository,
    VolunteerRepositoryError,
};
use crate::domain::{
    CleaningServicePage, ContactMessage, EventsPageSettings, MissionPage, NewContactMessage,
    SiteText, TranslationEntry, UserId, VolunteerGroup, VolunteerMembership,
};

#[async_trait]
impl ContentRepository for MemoryStore {
    async fn mission(&self) -> Result<Option<MissionPage>, ContentRepositoryError> {
        Ok(self.state().mission.clone())
    }

    async fn cleaning_service(
        &self,
    ) -> Result<Option<CleaningServicePage>, ContentRepositoryError> {
        Ok(self.state().cleaning_service.clone())
    }

    async fn events_page(&self) -> Result<Option<EventsPageSettings>, ContentRepositoryError> {
        Ok(self.state().events_page.clone())
    }
}

#[async_trait]
impl TranslationRepository for MemoryStore {
    async fn entries(
        &self,
        language: &str,
        namespace: &str,
    ) -> Result<Vec<TranslationEntry>, TranslationRepositoryError> {
        Ok(self
            .state()
            .translations
            .iter()
            .filter(|row| row.language == language && row.namespace == namespace)
            .cloned()
            .collect())
    }

    async fn site_text(&self) -> Result<Option<SiteText>, TranslationRepositoryError> {
        Ok(self.state().site_text.clone())
    }
}

#[async_trait]
impl ContactRepository for MemoryStore {
    async fn store(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let sent_at = self.now();
        let mut state = self.state();
        let stored = ContactMessage {
            id: state.allocate_id(),
            name: message.name().to_owned(),
            email: message.email().to_owned(),
            message: message.message().to_owned(),
            sent_at,
        };
        state.contacts.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl VolunteerRepository for MemoryStore {
    async fn active_groups(&self) -> Result<Vec<VolunteerGroup>, VolunteerRepositoryError> {
        let mut groups: Vec<_> = self
            .state()
            .groups
            .iter()
            .filter(|(_, active)| *active)
            .map(|(group, _)| group.clone())
            .collect();
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(groups)
    }

    async fn memberships_for(
        &self,
        user: UserId,
    ) -> Result<Vec<VolunteerMembership>, VolunteerRepositoryError> {
        let state = self.state();
        let mut memberships: Vec<_> = state
            .memberships
            .iter()
            .filter(|m| m.user == user)
            .filter_map(|m| {
                state
                    .groups
                    .iter()
                    .find(|(group, _)| group.id == m.group_id)
                    .map(|(group, _)| VolunteerMembership {
                        group_id: group.id,
                        group_name: group.name.clone(),
                        role: m.role,
                        added_at: m.added_at,
                    })
            })
            .collect();
        memberships.sort_by(|a, b| a.group_name.cmp(&b.group_name));
        Ok(memberships)
    }
}
