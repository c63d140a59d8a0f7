use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAppointment, DbAppointmentDetail, DbConsultant, DbSession, DbUser};

// Mock repositories for testing
mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            username: &'static str,
            password_hash: &'static str,
            is_admin: bool,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_username(
            &self,
            username: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;
    }
}

mock! {
    pub ConsultantRepo {
        pub async fn create_consultant(
            &self,
            name: &'static str,
            specialty: &'static str,
            time_start: NaiveTime,
            time_end: NaiveTime,
            days: &'static str,
        ) -> eyre::Result<DbConsultant>;

        pub async fn list_consultants(&self) -> eyre::Result<Vec<DbConsultant>>;

        pub async fn get_consultant_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbConsultant>>;

        pub async fn get_consultant_by_name(
            &self,
            name: &'static str,
        ) -> eyre::Result<Option<DbConsultant>>;

        pub async fn delete_consultant(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn create_appointment(
            &self,
            user_id: Option<Uuid>,
            name: &'static str,
            consultant_id: Uuid,
            scheduled_at: NaiveDateTime,
            appointment_number: &'static str,
        ) -> eyre::Result<DbAppointment>;

        pub async fn list_appointments(&self) -> eyre::Result<Vec<DbAppointmentDetail>>;

        pub async fn list_appointments_by_user(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<Vec<DbAppointmentDetail>>;

        pub async fn list_appointments_for_day(
            &self,
            day: NaiveDate,
        ) -> eyre::Result<Vec<DbAppointmentDetail>>;

        pub async fn confirm_appointment(&self, id: Uuid) -> eyre::Result<bool>;

        pub async fn delete_appointment(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub SessionRepo {
        pub async fn create_session(
            &self,
            token: &'static str,
            user_id: Uuid,
            expires_at: DateTime<Utc>,
        ) -> eyre::Result<DbSession>;

        pub async fn get_session(
            &self,
            token: &'static str,
        ) -> eyre::Result<Option<DbSession>>;

        pub async fn delete_session(&self, token: &'static str) -> eyre::Result<()>;

        pub async fn delete_expired_sessions(&self) -> eyre::Result<u64>;
    }
}
