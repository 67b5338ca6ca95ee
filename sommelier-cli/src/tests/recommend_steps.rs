//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{DISHES_JSON, DataDir, RULES_JSON, write_utf8};
use super::*;
use crate::recommend::run_recommend_with;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

#[derive(Debug)]
struct RecommendWorld {
    data: RefCell<DataDir>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            data: RefCell::new(DataDir::empty()),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["sommelier".to_owned(), "recommend".to_owned()];
        argv.extend([
            format!("--{ARG_RECOMMEND_DATA_DIR}"),
            self.data.borrow().root.as_str().to_owned(),
        ]);
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn output(&self) -> Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be JSON")
    }

    fn recommended(&self) -> Vec<String> {
        self.output()["recommendations"]
            .as_array()
            .expect("recommendations array")
            .iter()
            .map(|entry| entry["wine_name"].as_str().expect("wine name").to_owned())
            .collect()
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("the menu, wine list and rules exist on disk")]
fn all_sheets_exist(#[from(world)] world: &RecommendWorld) {
    *world.data.borrow_mut() = DataDir::with_sheets();
}

#[given("only the menu and rules exist on disk")]
fn wine_list_absent(#[from(world)] world: &RecommendWorld) {
    let data = world.data.borrow();
    write_utf8(&data.root.join("dishes.json"), DISHES_JSON.as_bytes());
    write_utf8(&data.root.join("rules.json"), RULES_JSON.as_bytes());
}

#[given("I ask for steak")]
fn ask_for_steak(#[from(world)] world: &RecommendWorld) {
    world.cli_args.borrow_mut().push("Steak".to_owned());
}

#[given("I ask for pizza")]
fn ask_for_pizza(#[from(world)] world: &RecommendWorld) {
    world.cli_args.borrow_mut().push("Pizza".to_owned());
}

#[given("I ask to avoid red wine")]
fn avoid_red_wine(#[from(world)] world: &RecommendWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_RECOMMEND_EXCLUDE}"), "kein Rotwein".to_owned()]);
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &mut *buffer)
        }
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and recommends Barolo first")]
fn recommends_barolo_first(#[from(world)] world: &RecommendWorld) {
    let recommended = world.recommended();
    assert_eq!(recommended.first().map(String::as_str), Some("Barolo"));
    assert_eq!(recommended.len(), 3);
    assert_eq!(world.output()["dish"], "Steak");
}

#[then("the command succeeds without recommending red wine")]
fn recommends_no_red_wine(#[from(world)] world: &RecommendWorld) {
    let recommended = world.recommended();
    assert_eq!(recommended, vec!["Crémant de Loire", "Riesling Kabinett"]);
    assert_eq!(world.output()["excluded"], serde_json::json!(["red"]));
}

#[then("the command fails because no dish matches")]
fn fails_without_dish_match(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::DishNotFound { query } => assert_eq!(query, "Pizza"),
        other => panic!("expected DishNotFound, found {other:?}"),
    }
}

#[then("the command fails because the wine list is missing")]
fn fails_without_wine_list(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_RECOMMEND_WINES),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[then("the command fails because the dish is missing")]
fn fails_without_dish(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_RECOMMEND_DISH),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(
            path = "tests/features/recommend_command.feature",
            name = $scenario_title
        )]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(
    recommend_happy_path,
    "recommending wines for a dish on the menu"
);
register_recommend_scenario!(recommend_excludes_red, "honouring a request to avoid red wine");
register_recommend_scenario!(recommend_unknown_dish, "rejecting a dish that is not on the menu");
register_recommend_scenario!(recommend_missing_wines, "rejecting a missing wine list");
register_recommend_scenario!(recommend_missing_dish, "rejecting a missing dish argument");
