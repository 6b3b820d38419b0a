//! Strategy Walkthrough Example
//!
//! Loads a small catalog, opens a raid boss and a trainer, and prints what a
//! detail view would render while drilling through the strategy tree.
//!
//! Session transitions are logged at debug level alongside the printed views.

use anyhow::{Context, Result};
use dexplan_session::model::Catalog;
use dexplan_session::{
    RecommendedView, Session, SessionAction, SessionView, StrategyState, Target,
};

const CATALOG: &str = r#"{
    "opponents": [
        {
            "name": "Agatha",
            "region": "Kanto",
            "type": "Ghost",
            "teams": {
                "Team 1": {
                    "pokemonNames": ["Gengar", "Umbreon"],
                    "pokemonStrategies": {
                        "Gengar": [
                            {"kind": "main", "text": "Lead with Tyranitar",
                             "variations": [
                                {"name": "Gengar uses Hypnosis", "warning": "Bring a Chesto Berry",
                                 "steps": [{"kind": "step", "text": "Switch to Snorlax and Crunch"}]},
                                {"name": "Gengar uses Destiny Bond"}
                             ]}
                        ]
                    }
                }
            }
        }
    ],
    "bosses": [
        {
            "name": "Dragonite",
            "stars": 5,
            "moves": ["Dragon Claw", "Hurricane"],
            "teamStrategies": [
                {
                    "roles": {
                        "player1": ["Use Protect", "Use Dragon Claw"],
                        "player2": ["Helping Hand"]
                    },
                    "recommended": [
                        {"name": "Weavile", "player": "player1", "order": 1, "item": "Choice Band"},
                        {"name": "Blissey", "player": "player2", "moves": ["Helping Hand", "Soft-Boiled"]}
                    ]
                },
                {"label": "Trick Room", "recommended": ["Any Trick Room setter works"]}
            ]
        }
    ]
}"#;

fn print_view(view: &SessionView<'_>) {
    match view.state {
        StrategyState::Closed => {
            println!("(closed)");
            return;
        }
        StrategyState::NoStrategy => println!("No strategy available yet."),
        StrategyState::Leaf | StrategyState::Branching => {}
    }

    if !view.breadcrumbs.is_empty() {
        println!("  path: {}", view.breadcrumbs.join(" > "));
    }
    for step in &view.steps {
        if let Some(text) = step.text {
            println!("  [{:?}] {}", step.kind, text);
        }
        for button in &step.buttons {
            let warning = button.warning.map(|w| format!(" ({})", w)).unwrap_or_default();
            let marker = if button.enabled { "->" } else { "  " };
            println!("    {} {}{}", marker, button.name, warning);
        }
    }

    if !view.roles.is_empty() {
        println!(
            "  roles {:?}, showing {} turn {}/{}: {}",
            view.roles,
            view.active_role,
            view.turn.index + 1,
            view.turn.count,
            view.turn.entry.and_then(|t| t.text()).unwrap_or("-")
        );
    }

    match &view.recommended {
        RecommendedView::None => {}
        RecommendedView::Notes(notes) => {
            for note in notes {
                println!("  note: {}", note);
            }
        }
        RecommendedView::Grouped {
            tabs,
            active,
            builds,
        } => {
            println!("  build tabs {:?}, showing {}", tabs, active);
            for build in builds {
                println!("    {} @ {}", build.name, build.item.as_deref().unwrap_or("no item"));
            }
        }
    }
    println!("  back enabled: {}", view.can_go_back);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let catalog = Catalog::from_json(CATALOG).context("failed to load catalog")?;
    catalog.validate().context("catalog failed validation")?;

    let mut session = Session::new();

    // Raid boss: roles, turns and build tabs
    let boss = catalog.boss("Dragonite").context("Dragonite missing")?.clone();
    println!("== {} ==", boss.name);
    print_view(&session.apply(SessionAction::Open(Target::boss(boss))));
    print_view(&session.apply(SessionAction::SelectRole("player2".to_string())));
    print_view(&session.apply(SessionAction::SelectBuildGroup("player2".to_string())));
    print_view(&session.apply(SessionAction::SelectVariant(1)));

    // Trainer: drill into a variation and back out
    let agatha = catalog.opponent("Agatha").context("Agatha missing")?.clone();
    println!("== {} ==", agatha.name);
    let view = session.apply(SessionAction::Open(Target::trainer(agatha)));
    print_view(&view);
    let hypnosis = view.steps[0].buttons[0].target;

    print_view(&session.apply(SessionAction::DrillInto(hypnosis)));
    print_view(&session.apply(SessionAction::Back));
    print_view(&session.apply(SessionAction::SelectPokemon("Umbreon".to_string())));
    print_view(&session.apply(SessionAction::SelectRegion("Johto".to_string())));

    Ok(())
}
