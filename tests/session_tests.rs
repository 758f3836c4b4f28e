use tokio::sync::mpsc;

use grow::catalog::Category;
use grow::error::CommandError;
use grow::form::{Command, Configurator, FormDelta, FormEvent, FormState, SideEffect};
use grow::resolver::{template, table, Resolve, Resolver, TableResolver, TemplateResolver};

fn template_session() -> (mpsc::Sender<FormEvent>, Configurator) {
    let (tx, rx) = mpsc::channel(100);
    let configurator = Configurator::new(rx, Resolver::Template(TemplateResolver::default()));
    (tx, configurator)
}

fn table_session() -> (mpsc::Sender<FormEvent>, Configurator) {
    let (tx, rx) = mpsc::channel(100);
    let configurator = Configurator::new(rx, Resolver::Table(TableResolver::default()));
    (tx, configurator)
}

fn select(category: Category, value: &str) -> FormEvent {
    FormEvent::Select {
        category,
        value: value.to_string(),
    }
}

fn complete_template_form() -> Vec<FormEvent> {
    vec![
        select(Category::Country, "germany"),
        select(Category::Space, "roof"),
        select(Category::Material, "metal"),
        select(Category::Shape, "gable"),
        select(Category::Pitch, "steep"),
    ]
}

#[test]
fn test_submit_incomplete_renders_error() {
    let (_tx, mut configurator) = template_session();

    let effects = configurator.step(vec![select(Category::Space, "roof"), FormEvent::Submit]);

    assert_eq!(
        effects,
        vec![SideEffect::RenderError(template::INCOMPLETE_MESSAGE.to_string())]
    );
    let result = configurator.state.result().expect("submit stores a result");
    assert!(result.is_error());
    assert_eq!(configurator.submissions(), 1);
}

#[test]
fn test_submit_complete_renders_suggestion() {
    let (_tx, mut configurator) = template_session();

    let mut events = complete_template_form();
    events.push(FormEvent::Submit);
    let effects = configurator.step(events);

    assert_eq!(effects.len(), 1);
    match &effects[0] {
        SideEffect::RenderSuggestion(text) => assert!(text.contains("Germany")),
        other => panic!("expected a suggestion, got {other:?}"),
    }
    assert!(configurator.state.result().unwrap().suggestion().is_some());
}

#[test]
fn test_field_change_invalidates_result() {
    let (_tx, mut configurator) = template_session();
    let mut events = complete_template_form();
    events.push(FormEvent::Submit);
    configurator.step(events);
    let version = configurator.state.version;

    let effects = configurator.step(vec![select(Category::Pitch, "low")]);

    assert_eq!(effects, vec![SideEffect::ClearResult]);
    assert!(configurator.state.result().is_none());
    assert_eq!(configurator.state.version, version + 1);
    assert_eq!(configurator.state.selection().get(Category::Pitch), Some("low"));

    // A second change has nothing left to clear.
    let effects = configurator.step(vec![select(Category::Pitch, "steep")]);
    assert!(effects.is_empty());
}

#[test]
fn test_reselecting_same_value_keeps_result() {
    let (_tx, mut configurator) = template_session();
    let mut events = complete_template_form();
    events.push(FormEvent::Submit);
    configurator.step(events);

    let effects = configurator.step(vec![select(Category::Pitch, "steep")]);
    assert!(effects.is_empty());
    assert!(configurator.state.result().is_some());
}

#[test]
fn test_reset_then_submit_reproduces_incomplete_error() {
    let (_tx, mut configurator) = template_session();
    let mut events = complete_template_form();
    events.push(FormEvent::Submit);
    configurator.step(events);

    let effects = configurator.step(vec![FormEvent::Reset]);
    assert_eq!(
        effects,
        vec![SideEffect::ClearResult, SideEffect::Log("Form reset.".to_string())]
    );
    assert!(configurator.state.selection().is_empty());
    assert!(configurator.state.result().is_none());

    let effects = configurator.step(vec![FormEvent::Submit]);
    assert_eq!(
        effects,
        vec![SideEffect::RenderError(template::INCOMPLETE_MESSAGE.to_string())]
    );
}

#[test]
fn test_unknown_option_is_rejected() {
    let (_tx, mut configurator) = template_session();

    let effects = configurator.step(vec![select(Category::Material, "slate")]);

    assert!(matches!(effects.as_slice(), [SideEffect::Log(msg)] if msg.contains("slate")));
    assert!(!configurator.state.selection().is_set(Category::Material));
}

#[test]
fn test_foreign_category_is_rejected() {
    let (_tx, mut configurator) = template_session();

    let effects = configurator.step(vec![select(Category::WallType, "brick")]);

    assert!(matches!(effects.as_slice(), [SideEffect::Log(_)]));
    assert!(!configurator.state.selection().is_set(Category::WallType));
}

#[test]
fn test_lookup_cascade_locks_later_fields() {
    let (_tx, mut configurator) = table_session();

    // Wall type before roof type is locked.
    let effects = configurator.step(vec![
        select(Category::Country, "germany"),
        select(Category::WallType, "brick"),
    ]);
    assert!(matches!(effects.as_slice(), [SideEffect::Log(msg)] if msg.contains("locked")));
    assert!(!configurator.state.selection().is_set(Category::WallType));

    let effects = configurator.step(vec![
        select(Category::RoofType, "flat"),
        select(Category::WallType, "brick"),
        FormEvent::Submit,
    ]);
    assert_eq!(
        effects,
        vec![SideEffect::RenderSuggestion(
            "Germany + Flat + Brick: PV + good insulation önerilir.".to_string()
        )]
    );

    // Clearing the country drops everything after it and the stale result.
    let effects = configurator.step(vec![FormEvent::Clear(Category::Country)]);
    assert_eq!(effects, vec![SideEffect::ClearResult]);
    assert!(configurator.state.selection().is_empty());
}

#[test]
fn test_lookup_missing_entry_renders_as_suggestion() {
    let (_tx, mut configurator) = table_session();

    let effects = configurator.step(vec![
        select(Category::Country, "czech"),
        select(Category::RoofType, "flat"),
        select(Category::WallType, "brick"),
        FormEvent::Submit,
    ]);

    assert_eq!(
        effects,
        vec![SideEffect::RenderSuggestion(table::NO_MATCH_MESSAGE.to_string())]
    );
}

#[test]
fn test_show_options_in_display_order() {
    let (_tx, mut configurator) = table_session();

    let effects = configurator.step(vec![
        FormEvent::ShowOptions(Category::Country),
        FormEvent::ShowOptions(Category::RoofType),
    ]);

    match &effects[..] {
        [SideEffect::ListOptions {
            category: Category::Country,
            enabled: true,
            options: countries,
        }, SideEffect::ListOptions {
            category: Category::RoofType,
            enabled: false,
            ..
        }] => {
            let values: Vec<_> = countries.iter().map(|o| o.value).collect();
            assert_eq!(values, vec!["germany", "turkey", "czech"]);
        }
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn test_form_state_can_submit_and_cascade() {
    let lookup = TableResolver::default();
    let mut state = FormState::new();
    assert!(!state.can_submit(lookup.required()));
    assert!(state.field_enabled(lookup.cascade(), Category::Country));
    assert!(!state.field_enabled(lookup.cascade(), Category::RoofType));

    for (category, value) in [
        (Category::Country, "turkey"),
        (Category::RoofType, "pitched"),
        (Category::WallType, "wood"),
    ] {
        state.reduce(FormDelta::FieldChanged {
            category,
            value: Some(value.to_string()),
        });
    }
    assert!(state.can_submit(lookup.required()));
    assert!(state.field_enabled(lookup.cascade(), Category::WallType));
    assert_eq!(state.version, 3);

    // The template form has no cascade.
    let template = TemplateResolver::default();
    assert!(template.cascade().is_empty());
    assert!(FormState::new().field_enabled(template.cascade(), Category::Pitch));
}

#[test]
fn test_command_parsing() {
    assert_eq!(
        "set roof-type flat".parse::<Command>(),
        Ok(Command::Event(select(Category::RoofType, "flat")))
    );
    assert_eq!(
        "  SUBMIT ".parse::<Command>(),
        Ok(Command::Event(FormEvent::Submit))
    );
    assert_eq!(
        "options wall_type".parse::<Command>(),
        Ok(Command::Event(FormEvent::ShowOptions(Category::WallType)))
    );
    assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));

    assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
    assert_eq!(
        "set country".parse::<Command>(),
        Err(CommandError::MissingArgument {
            command: "set",
            expected: "<category> <value>",
        })
    );
    assert_eq!(
        "clear colour".parse::<Command>(),
        Err(CommandError::UnknownCategory("colour".to_string()))
    );
    assert_eq!(
        "dance".parse::<Command>(),
        Err(CommandError::UnknownCommand("dance".to_string()))
    );
}

#[tokio::test]
async fn test_run_drains_channel_until_closed() {
    let (tx, mut configurator) = table_session();

    for event in [
        select(Category::Country, "germany"),
        select(Category::RoofType, "pitched"),
        select(Category::WallType, "brick"),
        FormEvent::Submit,
        select(Category::WallType, "wood"),
        FormEvent::Submit,
    ] {
        tx.send(event).await.unwrap();
    }
    drop(tx);

    let mut rendered = Vec::new();
    configurator.run(|effect| rendered.push(effect)).await;

    assert_eq!(
        rendered,
        vec![
            SideEffect::RenderSuggestion("Germany + Pitched + Brick: Roof tiles + PV çok yaygın.".to_string()),
            SideEffect::ClearResult,
            SideEffect::RenderSuggestion("Germany + Pitched + Wood: Lightweight PV sistem düşün.".to_string()),
        ]
    );
    assert_eq!(configurator.submissions(), 2);
}
