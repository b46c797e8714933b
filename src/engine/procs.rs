use std::cmp::Ordering;

use crate::system::snapshot::ProcessEntry;

/// Main table shows at most this many rows per cycle.
pub const TABLE_LIMIT: usize = 100;
/// Size of the fixed "top processes" widget.
pub const TOP_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Cpu,
    Memory,
    Name,
}

impl SortKey {
    pub fn next(self) -> Self {
        match self {
            SortKey::Cpu => SortKey::Memory,
            SortKey::Memory => SortKey::Name,
            SortKey::Name => SortKey::Cpu,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Cpu => "CPU",
            SortKey::Memory => "Memory",
            SortKey::Name => "Name",
        }
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" => SortKey::Memory,
            "name" => SortKey::Name,
            _ => SortKey::Cpu,
        }
    }
}

/// User-controlled view state: mutated only by explicit input events,
/// persists across poll cycles until changed.
#[derive(Debug, Clone, Default)]
pub struct ProcessQuery {
    pub filter: String,
    pub sort: SortKey,
}

/// Filter by name substring, stable-sort by key, truncate to the display
/// window. The input list is the latest fetch, replacing the prior list
/// wholesale; no merge or diff.
pub fn table_view(entries: &[ProcessEntry], query: &ProcessQuery) -> Vec<ProcessEntry> {
    let filter_lower = query.filter.to_lowercase();
    let mut rows: Vec<ProcessEntry> = entries
        .iter()
        .filter(|p| filter_lower.is_empty() || p.name.to_lowercase().contains(&filter_lower))
        .cloned()
        .collect();

    match query.sort {
        SortKey::Cpu => rows.sort_by(|a, b| {
            b.cpu_percent
                .partial_cmp(&a.cpu_percent)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Memory => rows.sort_by(|a, b| {
            b.memory_percent
                .partial_cmp(&a.memory_percent)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::Name => rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
    }

    rows.truncate(TABLE_LIMIT);
    rows
}

/// The top-processes widget: the first N entries in original fetch order,
/// independent of the user's filter and sort. The collector returns its list
/// ordered by CPU descending, so in practice these are the busiest processes.
pub fn top_view(entries: &[ProcessEntry]) -> Vec<ProcessEntry> {
    entries.iter().take(TOP_COUNT).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pid: u32, name: &str, cpu: f64, mem: f64) -> ProcessEntry {
        ProcessEntry {
            pid,
            name: name.to_string(),
            cpu_percent: cpu,
            memory_percent: mem,
            memory_rss: (mem * 1_000_000.0) as u64,
            user: None,
        }
    }

    #[test]
    fn filter_is_case_insensitive_and_keeps_fetch_order() {
        let list = vec![
            entry(1, "chrome", 0.0, 0.0),
            entry(2, "Terminal", 0.0, 0.0),
            entry(3, "chromium", 0.0, 0.0),
        ];
        let query = ProcessQuery {
            filter: "chrom".to_string(),
            sort: SortKey::Name,
        };
        let rows = table_view(&list, &query);
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["chrome", "chromium"]);
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let list = vec![entry(1, "a", 1.0, 1.0), entry(2, "b", 2.0, 2.0)];
        let rows = table_view(&list, &ProcessQuery::default());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn cpu_sort_is_descending() {
        let list = vec![
            entry(1, "a", 5.0, 0.0),
            entry(2, "b", 90.0, 0.0),
            entry(3, "c", 30.0, 0.0),
        ];
        let query = ProcessQuery {
            filter: String::new(),
            sort: SortKey::Cpu,
        };
        let cpus: Vec<f64> = table_view(&list, &query)
            .iter()
            .map(|p| p.cpu_percent)
            .collect();
        assert_eq!(cpus, vec![90.0, 30.0, 5.0]);
    }

    #[test]
    fn memory_sort_is_descending() {
        let list = vec![
            entry(1, "a", 0.0, 10.0),
            entry(2, "b", 0.0, 80.0),
            entry(3, "c", 0.0, 40.0),
        ];
        let query = ProcessQuery {
            filter: String::new(),
            sort: SortKey::Memory,
        };
        let mems: Vec<f64> = table_view(&list, &query)
            .iter()
            .map(|p| p.memory_percent)
            .collect();
        assert_eq!(mems, vec![80.0, 40.0, 10.0]);
    }

    #[test]
    fn name_sort_is_case_insensitive_ascending() {
        let list = vec![
            entry(1, "b", 0.0, 0.0),
            entry(2, "a", 0.0, 0.0),
            entry(3, "C", 0.0, 0.0),
        ];
        let query = ProcessQuery {
            filter: String::new(),
            sort: SortKey::Name,
        };
        let names: Vec<String> = table_view(&list, &query)
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["a", "b", "C"]);
    }

    #[test]
    fn table_truncates_to_display_window() {
        let list: Vec<ProcessEntry> = (0..250)
            .map(|i| entry(i, &format!("proc{i}"), i as f64, 0.0))
            .collect();
        let rows = table_view(&list, &ProcessQuery::default());
        assert_eq!(rows.len(), TABLE_LIMIT);
    }

    #[test]
    fn top_view_takes_first_five_in_fetch_order() {
        let list: Vec<ProcessEntry> = (0..10)
            .map(|i| entry(i, &format!("proc{i}"), (10 - i) as f64, 0.0))
            .collect();
        let top = top_view(&list);
        let pids: Vec<u32> = top.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn top_view_ignores_filter_state() {
        let list = vec![
            entry(1, "chrome", 1.0, 0.0),
            entry(2, "bash", 2.0, 0.0),
        ];
        // top_view has no query parameter at all; it cannot observe filters.
        assert_eq!(top_view(&list).len(), 2);
    }

    #[test]
    fn same_query_twice_yields_identical_rows() {
        let list = vec![
            entry(1, "chrome", 5.0, 1.0),
            entry(2, "chromium", 3.0, 2.0),
            entry(3, "bash", 9.0, 3.0),
        ];
        let query = ProcessQuery {
            filter: "chrom".to_string(),
            sort: SortKey::Cpu,
        };
        let first: Vec<u32> = table_view(&list, &query).iter().map(|p| p.pid).collect();
        let second: Vec<u32> = table_view(&list, &query).iter().map(|p| p.pid).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn sort_key_cycles_through_all_variants() {
        let key = SortKey::Cpu;
        assert_eq!(key.next(), SortKey::Memory);
        assert_eq!(key.next().next(), SortKey::Name);
        assert_eq!(key.next().next().next(), SortKey::Cpu);
    }
}
