//! Windowed aggregation and budget-projection curves

use chrono::NaiveDate;
use rusqlite::params;

use super::{day_start, Database};
use crate::error::Result;
use crate::models::{
    BreakdownEntry, BudgetConfig, BudgetCurve, SpendingBreakdown, CURVE_SLOTS, TOTAL_LABEL,
};

impl Database {
    /// Category totals over `[from, to)`, largest first.
    ///
    /// When `include_total` is set a grand-total entry is prepended under
    /// [`TOTAL_LABEL`]; an empty window still gets the total entry, at zero.
    pub fn spending_by_category(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        include_total: bool,
    ) -> Result<SpendingBreakdown> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT category_id, SUM(amount)
            FROM expenses
            WHERE date >= ?1 AND date < ?2
            GROUP BY category_id
            "#,
        )?;
        let mut groups: Vec<(String, i64)> = stmt
            .query_map(params![day_start(from), day_start(to)], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<rusqlite::Result<_>>()?;

        // Stable sort keeps equal totals in query order
        groups.sort_by(|a, b| b.1.cmp(&a.1));

        let ids: Vec<String> = groups.iter().map(|(id, _)| id.clone()).collect();
        let categories = self.lookup_categories_by_ids(&ids)?;

        let mut breakdown = SpendingBreakdown::default();
        if include_total {
            breakdown.entries.push(BreakdownEntry {
                label: TOTAL_LABEL.to_string(),
                total: groups.iter().map(|(_, total)| total).sum(),
            });
        }
        for (id, total) in groups {
            let label = categories
                .get(&id)
                .map(|category| category.name.clone())
                .unwrap_or(id);
            breakdown.entries.push(BreakdownEntry { label, total });
        }

        Ok(breakdown)
    }

    /// Planned vs cumulative actual spend for the month window `[from, to)`.
    ///
    /// Both sequences have [`CURVE_SLOTS`] entries: slot 0 is the
    /// start-of-month baseline, slots 1..=31 are days of the month. Slots
    /// past the month's last day carry the final cumulative value forward,
    /// since no expenses land there.
    pub fn budget_curve(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        budget: &BudgetConfig,
    ) -> Result<BudgetCurve> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT CAST(strftime('%d', date) AS INTEGER), SUM(amount)
            FROM expenses
            WHERE date >= ?1 AND date < ?2
            GROUP BY strftime('%d', date)
            "#,
        )?;
        let day_sums: Vec<(usize, i64)> = stmt
            .query_map(params![day_start(from), day_start(to)], |row| {
                Ok((row.get::<_, i64>(0)? as usize, row.get(1)?))
            })?
            .collect::<rusqlite::Result<_>>()?;

        let planned: Vec<i64> = (0..CURVE_SLOTS as i64).map(|d| d * budget.daily).collect();

        let mut actual = vec![0i64; CURVE_SLOTS];
        for (day, sum) in day_sums {
            if day < CURVE_SLOTS {
                actual[day] = sum;
            }
        }
        for d in 1..CURVE_SLOTS {
            actual[d] += actual[d - 1];
        }

        Ok(BudgetCurve { planned, actual })
    }
}
