use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;
use crate::domain::services::mail::MailSender;
use crate::domain::services::session::SessionService;

use crate::services::account::AccountServiceImpl;
use crate::services::mail::TracingMailSender;
use crate::services::session::{KeyPair, SessionServiceImpl};

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
    pub session_service: Arc<dyn SessionService>,
}

impl Container {
    pub fn new(conn: Surreal<Client>, keys: KeyPair) -> Self {
        let db = Arc::new(conn);

        Container {
            account_service: account_service(db.clone()),
            session_service: session_service(keys),
        }
    }
}

fn account_service(db: Arc<Surreal<Client>>) -> Arc<dyn AccountService> {
    let account_repository: Arc<dyn AccountRepository> =
        Arc::new(AccountRepositoryImpl::new(db.clone()));
    let mailer: Arc<dyn MailSender> = Arc::new(TracingMailSender);

    Arc::new(AccountServiceImpl::new(account_repository, mailer))
}

fn session_service(keys: KeyPair) -> Arc<dyn SessionService> {
    Arc::new(SessionServiceImpl::new(keys))
}
