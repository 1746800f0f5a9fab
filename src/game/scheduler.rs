use std::time::Duration;

/// Periodic activities run by the engine, in tie-break order.
///
/// The clock ticks before a same-instant advance, so a collision at a whole
/// second reports that second as survived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    SpawnObstacle,
    CountSecond,
    Advance,
}

impl Activity {
    pub const ALL: [Activity; 3] = [
        Activity::SpawnObstacle,
        Activity::CountSecond,
        Activity::Advance,
    ];

    fn slot(self) -> usize {
        match self {
            Activity::SpawnObstacle => 0,
            Activity::CountSecond => 1,
            Activity::Advance => 2,
        }
    }
}

/// Virtual-time timetable for the three periodic activities.
///
/// Times are offsets from session start. A cancelled activity has no due
/// time and never comes back from [`next_due`](Self::next_due) until it is
/// rescheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheduler {
    due: [Option<Duration>; 3],
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest pending activity. Ties go to the one listed first in [`Activity::ALL`].
    pub fn next_due(&self) -> Option<(Activity, Duration)> {
        Activity::ALL
            .iter()
            .filter_map(|&activity| self.due[activity.slot()].map(|at| (activity, at)))
            .min_by_key(|&(_, at)| at)
    }

    pub fn reschedule(&mut self, activity: Activity, at: Duration) {
        self.due[activity.slot()] = Some(at);
    }

    pub fn due_at(&self, activity: Activity) -> Option<Duration> {
        self.due[activity.slot()]
    }

    pub fn is_active(&self, activity: Activity) -> bool {
        self.due[activity.slot()].is_some()
    }

    pub fn cancel(&mut self, activity: Activity) {
        self.due[activity.slot()] = None;
    }

    pub fn cancel_all(&mut self) {
        self.due = [None; 3];
    }
}
