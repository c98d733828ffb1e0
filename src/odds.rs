//! Closed-form poker math: pot odds, EV, implied odds, SPR and the
//! rule-of-thumb equity shortcuts.
//!
//! Amounts are plain `f64` chips. Equities are fractions in `[0, 1]` except
//! in [`EquityShortcut`], which reports percentages the way they are quoted
//! at the table.

use std::fmt;

/// Stack-to-call multiple needed to set mine profitably.
pub const SET_MINING_THRESHOLD: f64 = 15.0;

/// Unseen cards after the flop from the hero's point of view.
const UNSEEN_ON_FLOP: f64 = 47.0;
const UNSEEN_ON_TURN: f64 = 46.0;

/// Round half up to `places` decimals.
fn round_to(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * scale + 0.5).floor() / scale
}

/// Share of the final pot the hero contributes by calling.
pub fn pot_odds(call: f64, pot: f64) -> f64 {
    if call <= 0.0 {
        return 0.0;
    }
    call / (pot + call)
}

/// Expected value of calling `call` into `pot` (which already holds the bet).
pub fn ev_of_calling(equity: f64, pot: f64, call: f64) -> f64 {
    equity * (pot + call) - (1.0 - equity) * call
}

/// Extra chips that must be won on later streets to make a call break even.
/// Negative means the direct odds already suffice.
pub fn implied_odds_f(call: f64, equity: f64, pot: f64) -> f64 {
    if equity <= 0.0 {
        return f64::INFINITY;
    }
    call / equity - (pot + 2.0 * call)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Feasibility {
    NotNeeded,
    Impossible,
    VeryAchievable,
    Borderline,
    VeryDifficult,
}

impl Feasibility {
    pub const fn as_str(self) -> &'static str {
        match self {
            Feasibility::NotNeeded => "not_needed",
            Feasibility::Impossible => "impossible",
            Feasibility::VeryAchievable => "very_achievable",
            Feasibility::Borderline => "borderline",
            Feasibility::VeryDifficult => "very_difficult",
        }
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedOddsAssessment {
    /// Required extra winnings, rounded to cents.
    pub f: f64,
    pub feasibility: Feasibility,
    /// `f` relative to the pot after calling, rounded to one decimal.
    pub f_as_pct_of_pot: f64,
    pub pot_after_call: f64,
}

/// Judge whether the implied odds a call needs can realistically be collected.
///
/// ```
/// use poker_odds::odds::{assess_implied_odds, Feasibility};
///
/// let a = assess_implied_odds(3500.0, 9.0 / 46.0, 10500.0, 50000.0);
/// assert!(a.f > 0.0);
/// assert_eq!(a.feasibility, Feasibility::VeryAchievable);
/// ```
pub fn assess_implied_odds(
    call: f64,
    equity: f64,
    pot: f64,
    remaining_stack: f64,
) -> ImpliedOddsAssessment {
    let f = implied_odds_f(call, equity, pot);
    let pot_after_call = pot + 2.0 * call;
    let pct = if pot_after_call > 0.0 { f / pot_after_call * 100.0 } else { 0.0 };

    let feasibility = if f < 0.0 {
        Feasibility::NotNeeded
    } else if f > remaining_stack {
        Feasibility::Impossible
    } else if pct <= 30.0 {
        Feasibility::VeryAchievable
    } else if pct <= 70.0 {
        Feasibility::Borderline
    } else {
        Feasibility::VeryDifficult
    };

    ImpliedOddsAssessment {
        f: round_to(f, 2),
        feasibility,
        f_as_pct_of_pot: round_to(pct, 1),
        pot_after_call,
    }
}

/// Stack-to-pot ratio; infinite for an empty pot.
pub fn spr(stack: f64, pot: f64) -> f64 {
    if pot <= 0.0 {
        return f64::INFINITY;
    }
    stack / pot
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SprCategory {
    VeryShallow,
    Short,
    Medium,
    Deep,
}

impl SprCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            SprCategory::VeryShallow => "very_shallow",
            SprCategory::Short => "short",
            SprCategory::Medium => "medium",
            SprCategory::Deep => "deep",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SprImpliedOdds {
    None,
    Poor,
    Moderate,
    Excellent,
}

impl SprImpliedOdds {
    pub const fn as_str(self) -> &'static str {
        match self {
            SprImpliedOdds::None => "none",
            SprImpliedOdds::Poor => "poor",
            SprImpliedOdds::Moderate => "moderate",
            SprImpliedOdds::Excellent => "excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprAnalysis {
    pub category: SprCategory,
    pub description: &'static str,
    pub implied_odds: SprImpliedOdds,
}

pub fn analyze_spr(value: f64) -> SprAnalysis {
    let (category, description, implied_odds) = if value < 1.0 {
        (SprCategory::VeryShallow, "Essentially committed to the pot", SprImpliedOdds::None)
    } else if value <= 3.0 {
        (SprCategory::Short, "Limited implied odds available", SprImpliedOdds::Poor)
    } else if value <= 8.0 {
        (SprCategory::Medium, "Reasonable implied odds for strong draws", SprImpliedOdds::Moderate)
    } else {
        (SprCategory::Deep, "Excellent implied odds for disguised hands", SprImpliedOdds::Excellent)
    };
    SprAnalysis { category, description, implied_odds }
}

/// Percent estimate with one card to come.
pub fn rule_of_2(outs: u32) -> u32 {
    outs * 2
}

/// Percent estimate with two cards to come. Overshoots above 8 outs.
pub fn rule_of_4(outs: u32) -> u32 {
    outs * 4
}

/// Two-card estimate that stays close for 9 or more outs.
pub fn corrected_rule(outs: u32) -> u32 {
    3 * outs + 8
}

/// Chance of hitting with the river alone.
pub fn exact_equity_1_card(outs: u32) -> f64 {
    f64::from(outs) / UNSEEN_ON_TURN
}

/// Chance of hitting on the turn or the river.
pub fn exact_equity_2_cards(outs: u32) -> f64 {
    let o = f64::from(outs);
    1.0 - (UNSEEN_ON_FLOP - o) * (UNSEEN_ON_TURN - o) / (UNSEEN_ON_FLOP * UNSEEN_ON_TURN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShortcutMethod {
    RuleOf2,
    RuleOf4,
    CorrectedRule,
}

impl ShortcutMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            ShortcutMethod::RuleOf2 => "Rule of 2",
            ShortcutMethod::RuleOf4 => "Rule of 4",
            ShortcutMethod::CorrectedRule => "Corrected Rule (3×outs+8)",
        }
    }
}

impl fmt::Display for ShortcutMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table-side estimate next to the exact value, both in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityShortcut {
    pub estimate: u32,
    /// Exact equity, rounded to one decimal.
    pub exact: f64,
    pub method: ShortcutMethod,
    pub warning: Option<String>,
}

/// Pick the shortcut that fits the street and whether betting is over.
///
/// With betting still to come only the next card is guaranteed, so the
/// one-card figure is used even on the flop.
pub fn equity_shortcut(outs: u32, cards_to_come: u8, all_in: bool) -> EquityShortcut {
    if cards_to_come == 1 || !all_in {
        let warning = (cards_to_come == 2 && !all_in)
            .then(|| "Using 1-card equity because there is still betting on the turn".to_string());
        return EquityShortcut {
            estimate: rule_of_2(outs),
            exact: round_to(exact_equity_1_card(outs) * 100.0, 1),
            method: ShortcutMethod::RuleOf2,
            warning,
        };
    }

    let exact = round_to(exact_equity_2_cards(outs) * 100.0, 1);
    if outs <= 8 {
        return EquityShortcut {
            estimate: rule_of_4(outs),
            exact,
            method: ShortcutMethod::RuleOf4,
            warning: None,
        };
    }

    EquityShortcut {
        estimate: corrected_rule(outs),
        exact,
        method: ShortcutMethod::CorrectedRule,
        warning: Some(format!(
            "Rule of 4 would say {}% but actual is {exact}%, corrected formula is more accurate",
            rule_of_4(outs)
        )),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetMiningCheck {
    /// Effective stack over call, rounded to one decimal.
    pub ratio: f64,
    pub threshold: f64,
    pub profitable: bool,
    pub reason: String,
}

/// Whether stacks are deep enough to call for a set.
pub fn set_mining_check(call: f64, effective_stack: f64) -> SetMiningCheck {
    let ratio = effective_stack / call;
    let profitable = ratio >= SET_MINING_THRESHOLD;
    let whole = round_to(ratio, 0);
    let reason = if profitable {
        format!("Stack depth ({whole}×) exceeds 15× threshold, set mining is profitable")
    } else {
        format!("Stack depth ({whole}×) is below 15× threshold, not enough implied odds to set mine")
    };
    SetMiningCheck { ratio: round_to(ratio, 1), threshold: SET_MINING_THRESHOLD, profitable, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pot_odds_values() {
        assert!(close(pot_odds(50.0, 100.0), 1.0 / 3.0));
        assert!(close(pot_odds(3500.0, 10500.0), 0.25));
        assert_eq!(pot_odds(0.0, 100.0), 0.0);
        assert_eq!(pot_odds(-5.0, 100.0), 0.0);
    }

    #[test]
    fn ev_of_calling_values() {
        assert!(close(ev_of_calling(0.5, 100.0, 50.0), 50.0));
        assert!(close(ev_of_calling(0.0, 100.0, 50.0), -50.0));
    }

    #[test]
    fn implied_odds_f_values() {
        assert!(close(implied_odds_f(100.0, 0.2, 300.0), 0.0));
        assert!(implied_odds_f(100.0, 0.5, 300.0) < 0.0);
        assert_eq!(implied_odds_f(100.0, 0.0, 300.0), f64::INFINITY);
    }

    #[test]
    fn feasibility_bands() {
        assert_eq!(assess_implied_odds(100.0, 0.5, 300.0, 1000.0).feasibility, Feasibility::NotNeeded);
        // f = 1000 - 500 = 500
        let a = assess_implied_odds(100.0, 0.1, 300.0, 400.0);
        assert_eq!(a.feasibility, Feasibility::Impossible);
        assert_eq!(a.pot_after_call, 500.0);
        assert_eq!(a.f, 500.0);
        assert_eq!(a.f_as_pct_of_pot, 100.0);
        assert_eq!(assess_implied_odds(100.0, 0.1, 300.0, 1000.0).feasibility, Feasibility::VeryDifficult);
        // f = 200 - 150 = 50, a third of the pot after calling
        assert_eq!(assess_implied_odds(50.0, 0.25, 50.0, 1000.0).feasibility, Feasibility::Borderline);
        assert_eq!(assess_implied_odds(0.0, 0.0, 0.0, 1.0).feasibility, Feasibility::Impossible);
    }

    #[test]
    fn assessment_rounds_reported_values() {
        let a = assess_implied_odds(3500.0, 9.0 / 46.0, 10500.0, 50000.0);
        // 3500 * 46 / 9 - 17500
        assert_eq!(a.f, 388.89);
        assert_eq!(a.f_as_pct_of_pot, 2.2);
        assert_eq!(a.feasibility, Feasibility::VeryAchievable);
    }

    #[test]
    fn spr_bands() {
        assert_eq!(spr(100.0, 0.0), f64::INFINITY);
        assert!(close(spr(500.0, 100.0), 5.0));
        assert_eq!(analyze_spr(0.5).category, SprCategory::VeryShallow);
        assert_eq!(analyze_spr(1.0).category, SprCategory::Short);
        assert_eq!(analyze_spr(3.0).implied_odds, SprImpliedOdds::Poor);
        assert_eq!(analyze_spr(8.0).category.as_str(), "medium");
        assert_eq!(analyze_spr(8.01).implied_odds.as_str(), "excellent");
        assert_eq!(analyze_spr(f64::INFINITY).category, SprCategory::Deep);
    }

    #[test]
    fn rules_of_thumb() {
        assert_eq!(rule_of_2(9), 18);
        assert_eq!(rule_of_4(9), 36);
        assert_eq!(corrected_rule(15), 53);
        assert!(close(exact_equity_1_card(9), 9.0 / 46.0));
        assert!((exact_equity_2_cards(9) - 0.3497).abs() < 1e-3);
        assert!((exact_equity_2_cards(15) - 0.5416).abs() < 1e-3);
        assert_eq!(exact_equity_2_cards(0), 0.0);
    }

    #[test]
    fn shortcut_one_card() {
        let s = equity_shortcut(9, 1, false);
        assert_eq!(s.method, ShortcutMethod::RuleOf2);
        assert_eq!(s.estimate, 18);
        assert_eq!(s.exact, 19.6);
        assert_eq!(s.warning, None);
    }

    #[test]
    fn shortcut_with_betting_left_on_the_flop() {
        let s = equity_shortcut(9, 2, false);
        assert_eq!(s.method.as_str(), "Rule of 2");
        assert_eq!(
            s.warning.as_deref(),
            Some("Using 1-card equity because there is still betting on the turn")
        );
    }

    #[test]
    fn shortcut_all_in_on_the_flop() {
        let s = equity_shortcut(8, 2, true);
        assert_eq!(s.method, ShortcutMethod::RuleOf4);
        assert_eq!(s.estimate, 32);
        assert_eq!(s.exact, 31.5);
        assert!(s.warning.is_none());

        let s = equity_shortcut(15, 2, true);
        assert_eq!(s.method, ShortcutMethod::CorrectedRule);
        assert_eq!(s.estimate, 53);
        assert_eq!(s.exact, 54.1);
        let warning = s.warning.unwrap();
        assert!(warning.contains("60%"));
        assert!(warning.contains("54.1%"));
    }

    #[test]
    fn set_mining() {
        let deep = set_mining_check(300.0, 5000.0);
        assert_eq!(deep.ratio, 16.7);
        assert!(deep.profitable);
        assert_eq!(deep.threshold, 15.0);
        assert!(deep.reason.contains("(17×) exceeds"));

        let shallow = set_mining_check(300.0, 3000.0);
        assert_eq!(shallow.ratio, 10.0);
        assert!(!shallow.profitable);
        assert!(shallow.reason.contains("(10×) is below"));

        assert!(set_mining_check(100.0, 1500.0).profitable);
    }
}
