//! Diesel ledger and token store against embedded PostgreSQL.
//!
//! Registration capacity and single-token replacement depend on row locks
//! taken inside transactions, so these tests race real connections.
//! Tests stay synchronous and drive a dedicated runtime; cluster bootstrap
//! and the `postgres` client must run outside it.

#[path = "support/pg_embed.rs"]
mod pg_embed;

use bijou_backend::domain::ports::{
    AuthTokenRepository, RegistrationLedger, RegistrationLedgerError, UserRepository,
};
use bijou_backend::domain::{EventId, NewUser, TokenKey, UserId};
use bijou_backend::outbound::persistence::{
    DbPool, DieselAuthTokenRepository, DieselRegistrationLedger, DieselUserRepository, PoolConfig,
};
use futures::future::join_all;
use pg_embedded_setup_unpriv::TemporaryDatabase;
use postgres::{Client, NoTls};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

struct TestDatabase {
    runtime: Runtime,
    pool: DbPool,
    url: String,
    _database: TemporaryDatabase,
}

impl TestDatabase {
    fn client(&self) -> Client {
        Client::connect(&self.url, NoTls).expect("connect to test database")
    }

    fn insert_event(&self, capacity: Option<i32>) -> EventId {
        let row = self
            .client()
            .query_one(
                "INSERT INTO events (title_en, title_ja, start_datetime, capacity) \
                 VALUES ('Picnic', 'ピクニック', now() + interval '7 days', $1) \
                 RETURNING id",
                &[&capacity],
            )
            .expect("insert event");
        EventId::new(row.get(0))
    }

    fn registrations_for(&self, event: EventId) -> i64 {
        self.client()
            .query_one(
                "SELECT count(*) FROM event_registrations WHERE event_id = $1",
                &[&event.get()],
            )
            .expect("count registrations")
            .get(0)
    }

    fn tokens_for(&self, user: UserId) -> i64 {
        self.client()
            .query_one(
                "SELECT count(*) FROM auth_tokens WHERE user_id = $1",
                &[&user.get()],
            )
            .expect("count tokens")
            .get(0)
    }

    fn create_members(&self, count: usize) -> Vec<UserId> {
        let users = DieselUserRepository::new(self.pool.clone());
        self.runtime.block_on(async {
            let mut ids = Vec::with_capacity(count);
            for _ in 0..count {
                let handle = Uuid::new_v4().simple();
                let user = users
                    .create(&NewUser {
                        username: format!("member-{handle}"),
                        email: format!("{handle}@x.com"),
                        password_hash: "$argon2id$stub".to_owned(),
                    })
                    .await
                    .expect("create member");
                ids.push(user.id);
            }
            ids
        })
    }

    fn create_member(&self) -> UserId {
        self.create_members(1).pop().expect("one member created")
    }

    fn race_registrations(
        &self,
        attempts: Vec<(UserId, EventId)>,
    ) -> Vec<Result<(), RegistrationLedgerError>> {
        let ledger = DieselRegistrationLedger::new(self.pool.clone());
        self.runtime.block_on(async {
            let tasks = attempts.into_iter().map(|(user, event)| {
                let ledger = ledger.clone();
                tokio::spawn(async move { ledger.register(user, event).await.map(|_| ()) })
            });
            join_all(tasks)
                .await
                .into_iter()
                .map(|joined| joined.expect("registration task joined"))
                .collect()
        })
    }
}

fn setup() -> Result<TestDatabase, String> {
    let database = pg_embed::migrated_database()?;
    let url = database.url().to_owned();
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let config = PoolConfig::new(url.clone())
        .with_max_size(8)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;
    Ok(TestDatabase {
        runtime,
        pool,
        url,
        _database: database,
    })
}

#[fixture]
fn database() -> Option<TestDatabase> {
    match setup() {
        Ok(db) => Some(db),
        Err(reason) => pg_embed::handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn racing_members_fill_exactly_the_capacity(database: Option<TestDatabase>) {
    let Some(db) = database else { return };
    let event = db.insert_event(Some(3));
    let members = db.create_members(8);

    let outcomes = db.race_registrations(members.iter().map(|&user| (user, event)).collect());

    let accepted = outcomes.iter().filter(|o| o.is_ok()).count();
    assert_eq!(accepted, 3);
    assert!(
        outcomes
            .iter()
            .filter_map(|o| o.as_ref().err())
            .all(|err| *err == RegistrationLedgerError::CapacityExceeded)
    );
    assert_eq!(db.registrations_for(event), 3);
}

#[rstest]
fn racing_duplicates_leave_one_row(database: Option<TestDatabase>) {
    let Some(db) = database else { return };
    let event = db.insert_event(None);
    let member = db.create_member();

    let outcomes = db.race_registrations(vec![(member, event); 6]);

    assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 1);
    assert!(
        outcomes
            .iter()
            .filter_map(|o| o.as_ref().err())
            .all(|err| *err == RegistrationLedgerError::AlreadyRegistered)
    );
    assert_eq!(db.registrations_for(event), 1);
}

#[rstest]
fn repeat_registration_for_last_slot_reports_duplicate(database: Option<TestDatabase>) {
    let Some(db) = database else { return };
    let event = db.insert_event(Some(1));
    let amy = db.create_member();
    let ben = db.create_member();

    let first = db.race_registrations(vec![(amy, event)]);
    let repeat = db.race_registrations(vec![(amy, event)]);
    let other = db.race_registrations(vec![(ben, event)]);

    assert_eq!(first, vec![Ok(())]);
    assert_eq!(repeat, vec![Err(RegistrationLedgerError::AlreadyRegistered)]);
    assert_eq!(other, vec![Err(RegistrationLedgerError::CapacityExceeded)]);
    assert_eq!(db.registrations_for(event), 1);
}

#[rstest]
fn unknown_event_is_reported(database: Option<TestDatabase>) {
    let Some(db) = database else { return };
    let member = db.create_member();

    let outcomes = db.race_registrations(vec![(member, EventId::new(404))]);

    assert_eq!(outcomes, vec![Err(RegistrationLedgerError::EventNotFound)]);
}

#[rstest]
fn racing_logins_leave_a_single_token(database: Option<TestDatabase>) {
    let Some(db) = database else { return };
    let member = db.create_member();
    let tokens = DieselAuthTokenRepository::new(db.pool.clone());
    let keys: Vec<TokenKey> = (0..8).map(|_| TokenKey::generate()).collect();

    let resolved = db.runtime.block_on(async {
        let tasks = keys.iter().cloned().map(|key| {
            let tokens = tokens.clone();
            tokio::spawn(async move { tokens.replace_for_user(member, &key).await })
        });
        for joined in join_all(tasks).await {
            joined.expect("login task joined").expect("token replaced");
        }
        let mut resolved = Vec::with_capacity(keys.len());
        for key in &keys {
            resolved.push(tokens.find_user(key).await.expect("lookup"));
        }
        resolved
    });

    assert_eq!(db.tokens_for(member), 1);
    assert_eq!(resolved.iter().filter(|user| **user == Some(member)).count(), 1);
    assert_eq!(resolved.iter().filter(|user| user.is_none()).count(), 7);
}

#[rstest]
fn revoking_twice_succeeds(database: Option<TestDatabase>) {
    let Some(db) = database else { return };
    let member = db.create_member();
    let tokens = DieselAuthTokenRepository::new(db.pool.clone());
    let key = TokenKey::generate();

    db.runtime.block_on(async {
        tokens
            .replace_for_user(member, &key)
            .await
            .expect("issue token");
        tokens.delete(&key).await.expect("first revoke");
        tokens.delete(&key).await.expect("second revoke");
        assert_eq!(tokens.find_user(&key).await, Ok(None));
    });

    assert_eq!(db.tokens_for(member), 0);
}
