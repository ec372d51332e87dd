use chrono::{Datelike, Local, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

pub const DAY_HEADERS: [&str; 7] = ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"];

/// The month currently shown by the calendar panel. Month is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
}

impl MonthView {
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn prev_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Pure grid computation; `today` is injected so rendering and tests
    /// agree on what "now" means.
    pub fn grid(&self, today: NaiveDate) -> MonthGrid {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap();
        let leading = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(self.year, self.month);

        let today_day = (today.year() == self.year && today.month() == self.month)
            .then(|| today.day());

        MonthGrid {
            leading,
            days,
            today: today_day,
        }
    }
}

/// One rendered month: `leading` blank cells, then days `1..=days`, padded
/// to full weeks of seven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub leading: usize,
    pub days: u32,
    pub today: Option<u32>,
}

impl MonthGrid {
    pub fn cell_count(&self) -> usize {
        let used = self.leading + self.days as usize;
        7 * used.div_ceil(7)
    }

    /// Grid cells in render order, including the trailing padding.
    pub fn cells(&self) -> impl Iterator<Item = Option<u32>> + '_ {
        let leading = self.leading;
        let days = self.days;
        (0..self.cell_count()).map(move |i| {
            let day = i as i64 - leading as i64 + 1;
            (day >= 1 && day <= days as i64).then_some(day as u32)
        })
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn off_month_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
    }

    #[test]
    fn cell_count_is_whole_weeks_for_every_month() {
        for year in 1999..=2031 {
            for month in 1..=12 {
                let view = MonthView { year, month };
                let grid = view.grid(off_month_date());
                let expected = 7 * (grid.leading + grid.days as usize).div_ceil(7);
                assert_eq!(grid.cell_count(), expected, "{year}-{month}");
                assert_eq!(grid.cells().count(), expected, "{year}-{month}");
                assert_eq!(
                    grid.cells().flatten().count(),
                    grid.days as usize,
                    "{year}-{month}"
                );
            }
        }
    }

    #[test]
    fn known_month_layout() {
        // February 2026 starts on a Sunday and has 28 days: exactly 4 weeks.
        let grid = MonthView { year: 2026, month: 2 }.grid(off_month_date());
        assert_eq!(grid.leading, 0);
        assert_eq!(grid.days, 28);
        assert_eq!(grid.cell_count(), 28);

        // August 2026 starts on a Saturday: 6 leading blanks, 31 days.
        let grid = MonthView { year: 2026, month: 8 }.grid(off_month_date());
        assert_eq!(grid.leading, 6);
        assert_eq!(grid.days, 31);
        assert_eq!(grid.cell_count(), 42);
    }

    #[test]
    fn leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn today_is_flagged_only_in_its_own_month() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();

        let shown = MonthView { year: 2026, month: 8 };
        assert_eq!(shown.grid(today).today, Some(4));

        let other_month = MonthView { year: 2026, month: 7 };
        assert_eq!(other_month.grid(today).today, None);

        let other_year = MonthView { year: 2025, month: 8 };
        assert_eq!(other_year.grid(today).today, None);
    }

    #[test]
    fn month_navigation_rolls_the_year() {
        let mut view = MonthView { year: 2026, month: 1 };
        view.prev_month();
        assert_eq!(view, MonthView { year: 2025, month: 12 });

        view.next_month();
        assert_eq!(view, MonthView { year: 2026, month: 1 });

        let mut view = MonthView { year: 2026, month: 12 };
        view.next_month();
        assert_eq!(view, MonthView { year: 2027, month: 1 });
    }

    #[test]
    fn titles_use_french_month_names() {
        assert_eq!(MonthView { year: 2026, month: 8 }.title(), "Août 2026");
        assert_eq!(MonthView { year: 2025, month: 1 }.title(), "Janvier 2025");
    }
}
