use std::sync::atomic::{AtomicU64, Ordering};

use venue_domain::PipelineStats;

#[derive(Debug, Default)]
pub struct Metrics {
    runs: AtomicU64,
    run_errors: AtomicU64,
    raw_records: AtomicU64,
    dropped_records: AtomicU64,
    events: AtomicU64,
    room_merges: AtomicU64,
    session_merges: AtomicU64,
    discarded_events: AtomicU64,
    recording_tasks: AtomicU64,
}

impl Metrics {
    pub fn record_run(&self, stats: &PipelineStats, task_count: usize) {
        self.runs.fetch_add(1, Ordering::Relaxed);
        self.raw_records
            .fetch_add(stats.raw_records as u64, Ordering::Relaxed);
        self.dropped_records
            .fetch_add(stats.dropped_records as u64, Ordering::Relaxed);
        self.events
            .fetch_add(stats.finalized_events as u64, Ordering::Relaxed);
        self.room_merges
            .fetch_add(stats.room_merges as u64, Ordering::Relaxed);
        self.session_merges
            .fetch_add(stats.session_merges as u64, Ordering::Relaxed);
        self.discarded_events
            .fetch_add(stats.discarded_events as u64, Ordering::Relaxed);
        self.recording_tasks
            .fetch_add(task_count as u64, Ordering::Relaxed);
    }

    pub fn record_run_error(&self) {
        self.run_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let counters = [
            ("venue_sync_runs_total", &self.runs),
            ("venue_sync_run_errors_total", &self.run_errors),
            ("venue_sync_raw_records_total", &self.raw_records),
            ("venue_sync_dropped_records_total", &self.dropped_records),
            ("venue_sync_events_total", &self.events),
            ("venue_sync_room_merges_total", &self.room_merges),
            ("venue_sync_session_merges_total", &self.session_merges),
            ("venue_sync_discarded_events_total", &self.discarded_events),
            ("venue_sync_recording_tasks_total", &self.recording_tasks),
        ];

        let mut out = String::new();
        for (name, counter) in counters {
            out.push_str(&format!(
                "# TYPE {name} counter\n{name} {}\n",
                counter.load(Ordering::Relaxed)
            ));
        }
        out
    }
}
