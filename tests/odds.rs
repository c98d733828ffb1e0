use poker_odds::odds::*;

const TOL: f64 = 1e-3;

#[test]
fn closed_form_values() {
    assert!((pot_odds(5000.0, 15000.0) - 0.25).abs() < TOL);
    assert_eq!(implied_odds_f(1000.0, 0.0, 5000.0), f64::INFINITY);
    assert_eq!(rule_of_2(9), 18);
    assert_eq!(corrected_rule(15), 53);
    assert!((exact_equity_1_card(9) - 0.19565).abs() < TOL);
}

#[test]
fn call_too_big_for_the_stack_behind() {
    let a = assess_implied_odds(200_000.0, 0.17, 280_000.0, 250_000.0);
    assert_eq!(a.feasibility, Feasibility::Impossible);
    assert_eq!(a.feasibility.as_str(), "impossible");
    assert_eq!(a.pot_after_call, 680_000.0);
}

#[test]
fn set_mining_with_deep_stacks() {
    let check = set_mining_check(1500.0, 25_000.0);
    assert!((check.ratio - 16.7).abs() < TOL);
    assert!(check.profitable);
    assert_eq!(check.threshold, SET_MINING_THRESHOLD);
}

#[test]
fn turn_flush_draw_needs_implied_odds() {
    // 9 outs, villain bets 3500 into 7000
    let needed = pot_odds(3500.0, 10_500.0);
    let equity = exact_equity_1_card(9);
    assert!(equity < needed);
    assert!(ev_of_calling(equity, 10_500.0, 3500.0) < 0.0);

    let a = assess_implied_odds(3500.0, 9.0 / 46.0, 10_500.0, 50_000.0);
    assert!(a.f > 0.0);
    assert_eq!(a.feasibility, Feasibility::VeryAchievable);
    assert!(a.f < 50_000.0);
}

#[test]
fn spr_drives_the_plan() {
    let shallow = analyze_spr(spr(4000.0, 6000.0));
    assert_eq!(shallow.category, SprCategory::VeryShallow);
    assert_eq!(shallow.description, "Essentially committed to the pot");

    let deep = analyze_spr(spr(100_000.0, 6000.0));
    assert_eq!(deep.category, SprCategory::Deep);
    assert_eq!(deep.implied_odds, SprImpliedOdds::Excellent);

    assert_eq!(analyze_spr(spr(1000.0, 0.0)).category, SprCategory::Deep);
}

#[test]
fn shortcut_methods_by_street() {
    assert_eq!(equity_shortcut(4, 1, false).method.as_str(), "Rule of 2");
    assert_eq!(equity_shortcut(4, 2, true).method.as_str(), "Rule of 4");
    assert_eq!(equity_shortcut(12, 2, true).method.as_str(), "Corrected Rule (3×outs+8)");
    assert_eq!(equity_shortcut(12, 2, true).estimate, 44);
}
