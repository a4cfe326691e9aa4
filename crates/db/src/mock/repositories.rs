use async_trait::async_trait;
use courtside_core::{
    models::{
        attendance::AttendanceRow,
        participant::{AbsenceRow, ParticipantRow},
    },
    store::{AbsenceStore, AttendanceStore, RosterStore},
};
use mockall::mock;

// Mock stores for testing
mock! {
    pub Roster {}

    #[async_trait]
    impl RosterStore for Roster {
        async fn append_participant(&self, row: &ParticipantRow) -> eyre::Result<()>;

        async fn read_all_participants(&self) -> eyre::Result<Vec<ParticipantRow>>;
    }
}

mock! {
    pub Absences {}

    #[async_trait]
    impl AbsenceStore for Absences {
        async fn append_absence(&self, row: &AbsenceRow) -> eyre::Result<()>;

        async fn read_all_absences(&self) -> eyre::Result<Vec<AbsenceRow>>;
    }
}

mock! {
    pub Attendance {}

    #[async_trait]
    impl AttendanceStore for Attendance {
        async fn append_attendance(&self, row: &AttendanceRow) -> eyre::Result<()>;

        async fn read_all_attendance(&self) -> eyre::Result<Vec<AttendanceRow>>;
    }
}
