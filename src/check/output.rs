//! Text rendering of a DiagnosticReport.

use std::fmt::{self, Write};

use crate::check::identity::EMAIL_SETTINGS_URL;
use crate::check::report::{DiagnosticReport, BAR_WIDTH};
use crate::utils::types::{Section, Status};

const RULE_WIDTH: usize = 70;

pub fn render(report: &DiagnosticReport) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut impl Write, r: &DiagnosticReport) -> fmt::Result {
    banner(out, "GITHUB CONTRIBUTIONS DIAGNOSTIC")?;
    writeln!(out, "   Repository   : {}", r.repository)?;
    writeln!(out, "   Generated at : {}", r.generated_at)?;
    if let Some(notice) = &r.notice {
        writeln!(out, "\n   {}{}", Status::Warn.icon(), notice)?;
    }

    for (i, section) in r.sections.iter().enumerate() {
        write_section(out, i + 1, section)?;
    }

    write_solutions(out, &r.default_branch)?;
    write_score(out, r)?;
    write_verdict(out, r)?;
    write_checklist(out, r)?;
    write_summary(out, r)
}

// ── sections ────────────────────────────────────────────────────────────────

fn write_section(out: &mut impl Write, number: usize, s: &Section) -> fmt::Result {
    writeln!(out, "\n{}. {}", number, s.title)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for f in &s.findings {
        writeln!(out, "   {}{}", f.status.icon(), f.message)?;
    }
    Ok(())
}

fn write_solutions(out: &mut impl Write, default_branch: &str) -> fmt::Result {
    writeln!(out)?;
    banner(out, "SOLUTIONS")?;
    write!(
        out,
        "
📧 EMAIL NOT VERIFIED (90% of issues!)
   → {emails}
   → Must have green checkmark ✓

🌳 NOT ON DEFAULT BRANCH
   → git checkout {branch}
   → git push origin {branch}

🔒 PRIVATE REPO
   → https://github.com/settings/profile
   → Check ☑️ 'Include private contributions'

⏰ WAIT 24-48 HOURS
   → Graph updates fast
   → Total stats update SLOW (24-48h)

🔄 FORCE REFRESH
   → git commit --allow-empty -m \"Refresh\"
   → git push

",
        emails = EMAIL_SETTINGS_URL,
        branch = default_branch,
    )
}

// ── score ───────────────────────────────────────────────────────────────────

pub fn progress_bar(report: &DiagnosticReport) -> String {
    let filled = report.bar_fill(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn write_score(out: &mut impl Write, r: &DiagnosticReport) -> fmt::Result {
    banner(out, "VERIFICATION STATUS")?;
    let pct = r.percentage();

    writeln!(out, "\n📊 SCORE: {}/{} checks passed ({:.0}%)", r.passed.len(), r.total(), pct)?;
    writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;
    writeln!(out, "   [{}] {:.0}%\n", progress_bar(r), pct)?;

    if !r.passed.is_empty() {
        writeln!(out, "✅ PASSED CHECKS:")?;
        writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;
        for (i, label) in r.passed.iter().enumerate() {
            writeln!(out, "   {}. ✓ {}", i + 1, label)?;
        }
        writeln!(out)?;
    }

    if !r.failed.is_empty() {
        writeln!(out, "❌ FAILED CHECKS:")?;
        writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;
        for (i, label) in r.failed.iter().enumerate() {
            writeln!(out, "   {}. ✗ {}", i + 1, label)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

// ── verdict ─────────────────────────────────────────────────────────────────

fn write_verdict(out: &mut impl Write, r: &DiagnosticReport) -> fmt::Result {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    if r.all_passed() {
        writeln!(out, "   ✅ ALL AUTOMATED CHECKS PASSED!")?;
        writeln!(out, "{}\n", "=".repeat(RULE_WIDTH))?;
        framed(out, "🎉 CONGRATULATIONS! All automated checks passed!")?;
        writeln!(out, "\n⚠️  MANUAL VERIFICATION REQUIRED:")?;
        writeln!(out, "{}\n", "─".repeat(RULE_WIDTH))?;
        writeln!(out, "   📧 STEP 1: Verify Email")?;
        writeln!(out, "      • Your email: {}", r.email)?;
        writeln!(out, "      • Visit: {}", EMAIL_SETTINGS_URL)?;
        writeln!(out, "      • Ensure green checkmark ✓ next to your email\n")?;
        writeln!(out, "   🔒 STEP 2: Check Private Contributions (if private repo)")?;
        writeln!(out, "      • Visit: https://github.com/settings/profile")?;
        writeln!(out, "      • Find: 'Contributions & Activity'")?;
        writeln!(out, "      • Enable: ☑️ 'Include private contributions'\n")?;
        writeln!(out, "   ⏰ STEP 3: Wait for GitHub to Update")?;
        writeln!(out, "      • Contribution graph: 5-30 minutes")?;
        writeln!(out, "      • Total statistics: 24-48 HOURS ⚠️")?;
        writeln!(out, "      • Be patient! GitHub needs time to recalculate")?;
    } else {
        writeln!(out, "   ⚠️  SOME CHECKS FAILED - ACTION REQUIRED!")?;
        writeln!(out, "{}\n", "=".repeat(RULE_WIDTH))?;
        framed(
            out,
            &format!("❌ {} CHECK(S) FAILED - Please fix the issues above", r.failed.len()),
        )?;
        writeln!(out, "\n📝 NEXT STEPS:")?;
        writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;
        writeln!(out, "   1. Review the failed checks above")?;
        writeln!(out, "   2. Apply the suggested fixes")?;
        writeln!(out, "   3. Run this tool again to verify")?;
        writeln!(out, "   4. Repeat until all checks pass")?;
    }
    Ok(())
}

// ── checklist ───────────────────────────────────────────────────────────────

fn write_checklist(out: &mut impl Write, r: &DiagnosticReport) -> fmt::Result {
    writeln!(out)?;
    banner(out, "📋 MANUAL CHECKLIST")?;
    writeln!(out)?;

    if r.all_passed() {
        writeln!(out, "   ☑  Email configured in Git")?;
        writeln!(out, "   ☑  On default branch")?;
        writeln!(out, "   ☑  Changes pushed to GitHub")?;
    } else {
        for label in &r.passed {
            writeln!(out, "   ☑  {}", label)?;
        }
        for label in &r.failed {
            writeln!(out, "   ☐  {} ❌", label)?;
        }
    }

    // things no local query can confirm
    writeln!(out)?;
    writeln!(out, "   ☐  Email VERIFIED in GitHub (manual check required!)")?;
    writeln!(out, "   ☐  'Include private contributions' ON (if private repo)")?;
    writeln!(out, "   ☐  Waited 24-48 hours for stats to update")?;
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn write_summary(out: &mut impl Write, r: &DiagnosticReport) -> fmt::Result {
    let rows: Vec<(&str, String)> = if r.all_passed() {
        vec![
            ("Status:", "✅ All automated checks PASSED".to_string()),
            ("Action:", "⚠️  Verify email manually in GitHub".to_string()),
            ("Wait:", "⏰ 24-48 hours for stats to update".to_string()),
            ("Progress:", "🟢 Ready for manual verification".to_string()),
        ]
    } else {
        vec![
            ("Status:", format!("❌ {} check(s) FAILED", r.failed.len())),
            ("Action:", "🔧 Fix issues above".to_string()),
            ("Next:", "🔄 Run again after fixes".to_string()),
            ("Progress:", "🟡 Needs attention".to_string()),
        ]
    };

    writeln!(out)?;
    writeln!(out, "╔{}╗", "═".repeat(RULE_WIDTH - 6))?;
    writeln!(out, "║  💡 QUICK SUMMARY")?;
    writeln!(out, "╠{}╣", "═".repeat(RULE_WIDTH - 6))?;
    for (key, value) in &rows {
        writeln!(out, "║  {:<10} {}", key, value)?;
    }
    writeln!(out, "╚{}╝", "═".repeat(RULE_WIDTH - 6))?;
    writeln!(out)
}

// ── helpers ─────────────────────────────────────────────────────────────────

fn banner(out: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "   {}", title)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn framed(out: &mut impl Write, text: &str) -> fmt::Result {
    let inner = RULE_WIDTH - 14;
    writeln!(out, "   ╔{}╗", "═".repeat(inner))?;
    writeln!(out, "   ║  {}", text)?;
    writeln!(out, "   ╚{}╝", "═".repeat(inner))
}
