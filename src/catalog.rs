//! Default document catalog.
//!
//! The identifiers of the bundled essay collection, in harvest order, and
//! the base location they resolve against.

/// Base location the default identifiers resolve against.
pub const DEFAULT_BASE_URL: &str = "https://yoshi389111.github.io/kinokobooks/soft_en/";

/// Default document identifiers, in output order.
pub const DOCUMENTS: &[&str] = &[
    "Dont_put_your_resume_ahead_of_the_requirements.htm",
    "Simplify_essential_complexity;_diminish_accidental_complexity.htm",
    "Chances_are_your_biggest_problem_isnt_technical.htm",
    "Communication_is_King;_Clarity_and_Leadership_its_humble_servants.htm",
    "Application_architecture_determines_application_performance.htm",
    "Seek_the_value_in_requested_capabilities.htm",
    "Stand_Up.htm",
    "Everything_will_ultimately_fail.htm",
    "Youre_negotiating_more_often_than_you_think..htm",
    "Quantify.htm",
    "One_line_of_working_code_is_worth_500_of_specification.htm",
    "There_is_no_one-size-fits-all_solution.htm",
    "Its_never_too_early_to_think_about_performance.htm",
    "Architecting_is_about_balancing.htm",
    "Commit-and-run_is_a_crime..htm",
    "There_Can_be_More_than_One.htm",
    "Business_Drives.htm",
    "Simplicity_before_generality,_use_before_reuse.htm",
    "Architects_must_be_hands_on.htm",
    "Continuously_Integrate.htm",
    "Avoid_Scheduling_Failures.htm",
    "Architectural_Tradeoffs.htm",
    "Database_as_a_Fortress.htm",
    "Use_uncertainty_as_a_driver.htm",
    "Warning,_problems_in_mirror_may_be_larger_than_they_appear.htm",
    "Reuse_is_about_people_and_education,_not_just_architecture.htm",
    "There_is_no_I_in_architecture.htm",
    "Get_the_1000ft_view.htm",
    "Try_before_choosing.htm",
    "Understand_The_Business_Domain.htm",
    "Programming_is_an_act_of_design.htm",
    "Give_developers_autonomy.htm",
    "Time_changes_everything.htm",
    "The_title_of_software_architect_has_only_lower-case_as_deal_with_it.htm",
    "Scope_is_the_enemy_of_success.htm",
    "Value_stewardship_over_showmanship.htm",
    "Software_architecture_has_ethical_consequences.htm",
    "Skyscrapers_arent_scalable.htm",
    "Heterogeneity_Wins.htm",
    "Its_all_about_performance.htm",
    "Engineer_in_the_white_spaces.htm",
    "Talk_the_Talk.htm",
    "Context_is_King.htm",
    "Dwarves,_Elves,_Wizards,_and_Kings.htm",
    "Learn_from_Architects_of_Buildings.htm",
    "Fight_repetition.htm",
    "Welcome_to_the_Real_World.htm",
    "Dont_Control,_but_Observe.htm",
    "Janus_the_Architect.htm",
    "Architects_focus_is_on_the_boundaries_and_interfaces.htm",
    "Empower_developers.htm",
    "Record_your_rationale.htm",
    "Challenge_assumptions_-_especially_your_own.htm",
    "Share_your_knowledge_and_experiences.htm",
    "Pattern_Pathology.htm",
    "Dont_Stretch_The_Architecture_Metaphors.htm",
    "Focus_on_Application_Support_and_Maintenance.htm",
    "Prepare_to_pick_two.htm",
    "Prefer_principles,_axioms_and_analogies_to_opinion_and_taste.htm",
    "Start_with_a_Walking_Skeleton.htm",
    "It_is_all_about_the_data.htm",
    "Make_sure_the_simple_stuff_is_simple.htm",
    "Before_anything,_an_architect_is_a_developer.htm",
    "The_ROI_variable.htm",
    "Your_system_is_legacy,_design_for_it..htm",
    "If_there_is_only_one_solution,_get_a_second_opinion.htm",
    "Understand_the_impact_of_change.htm",
    "You_have_to_understand_Hardware_too.htm",
    "Shortcuts_now_are_paid_back_with_interest_later.htm",
    "Perfect_is_the_Enemy_of_Good_Enough.htm",
    "Avoid_Good_Ideas.htm",
    "Great_content_creates_great_systems.htm",
    "The_Business_Vs._The_Angry_Architect.htm",
    "Stretch_key_dimensions_to_see_what_breaks.htm",
    "If_you_design_it,_you_should_be_able_to_code_it..htm",
    "A_rose_by_any_other_name_will_end_up_as_a_cabbage.htm",
    "Stable_problems_get_high_quality_solutions.htm",
    "It_Takes_Diligence.htm",
    "Take_responsibility_for_your_decisions.htm",
    "Dont_Be_Clever.htm",
    "Choose_your_weapons_carefully,_relinquish_them_reluctantly.htm",
    "Your_Customer_is_Not_Your_Customer.htm",
    "It_will_never_look_like_that.htm",
    "Choose_Frameworks_that_play_well_with_others.htm",
    "Make_a_strong_business_case.htm",
    "Control_the_data,_not_just_the_code.htm",
    "Pay_down_your_technical_debt.htm",
    "Dont_Be_a_Problem_Solver.htm",
    "Build_Systems_to_be_Zuhanden.htm",
    "Find_and_retain_passionate_problem_solvers.htm",
    "Software_doesnt_really_exist.htm",
    "Learn_a_new_language.htm",
    "You_cant_future-proof_solutions.htm",
    "The_User_Acceptance_Problem.htm",
    "The_Importance_of_Consomme.htm",
    "For_the_end-user,_the_interface_is_the_system.htm",
    "Great_software_is_not_built,_it_is_grown.htm",
];

/// Owned copy of [`DOCUMENTS`].
#[must_use]
pub fn default_documents() -> Vec<String> {
    DOCUMENTS.iter().map(ToString::to_string).collect()
}

/// Parse a manifest: one identifier per line.
///
/// Surrounding whitespace is trimmed; blank lines and lines starting with
/// `#` are skipped.
///
/// ```rust
/// use article_harvest::catalog::parse_manifest;
///
/// let ids = parse_manifest("# essays\nQuantify.htm\n\n  Stand_Up.htm \n");
/// assert_eq!(ids, ["Quantify.htm", "Stand_Up.htm"]);
/// ```
#[must_use]
pub fn parse_manifest(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}
