//! Report command implementations

use anyhow::Result;
use tally_core::{BudgetConfig, Database, ExpenseTracker, SpendingBreakdown};

pub fn cmd_today(db: &Database, include_total: bool) -> Result<()> {
    let breakdown = ExpenseTracker::new(db).today_breakdown(include_total)?;

    println!();
    println!("📊 Today's spending");
    print_breakdown(&breakdown);

    Ok(())
}

pub fn cmd_month(db: &Database, previous: bool, include_total: bool) -> Result<()> {
    let tracker = ExpenseTracker::new(db);
    let (title, breakdown) = if previous {
        (
            "Previous month's spending",
            tracker.previous_month_breakdown(include_total)?,
        )
    } else {
        (
            "This month's spending",
            tracker.month_breakdown(include_total)?,
        )
    };

    println!();
    println!("📊 {}", title);
    print_breakdown(&breakdown);

    Ok(())
}

pub fn cmd_budget(
    db: &Database,
    previous: bool,
    daily: Option<i64>,
    monthly: Option<i64>,
) -> Result<()> {
    let defaults = BudgetConfig::default();
    let budget = BudgetConfig {
        daily: daily.unwrap_or(defaults.daily),
        monthly: monthly.unwrap_or(defaults.monthly),
    };

    let tracker = ExpenseTracker::new(db);
    let curve = if previous {
        tracker.previous_month_budget_curve(&budget)?
    } else {
        tracker.month_budget_curve(&budget)?
    };

    println!();
    println!(
        "📈 Budget tracking (daily {}, monthly {})",
        budget.daily, budget.monthly
    );
    println!("   {:>3} │ {:>10} │ {:>10}", "Day", "Planned", "Actual");
    println!("   ────┼────────────┼────────────");
    // Slot 0 is the start-of-month baseline
    for day in 1..curve.planned.len() {
        println!(
            "   {:>3} │ {:>10} │ {:>10}",
            day, curve.planned[day], curve.actual[day]
        );
    }

    Ok(())
}

fn print_breakdown(breakdown: &SpendingBreakdown) {
    println!("   ─────────────────────────────────────────────────────────────");
    if breakdown.is_empty() {
        println!("   No spending found in this period.");
        return;
    }
    for line in breakdown.to_text().lines() {
        println!("   {}", line);
    }
}
