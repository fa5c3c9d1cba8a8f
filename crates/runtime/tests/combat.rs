use std::io::Write;

use agent_content::WorldLoader;
use agent_core::{AgentConfig, WorldSnapshot};
use macro_tree::Macro;
use runtime::{CombatCompiler, script_digest};

type Program = fn(&CombatCompiler<'_>) -> Macro;

fn load(body: &str) -> WorldSnapshot {
    let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    WorldLoader::load(file.path()).unwrap()
}

const GOO_WORLD: &str = r#"(
    class: grey_goo,
    attributes: { adventures: 40, muscle: 120, mysticality: 300, moxie: 300 },
    inventory: {
        "Time-Spinner": 1,
        "porquoise-handled sixgun": 1,
        "little red book": 1,
    },
    skills: ["Nanoshock", "Audioclasm", "Ambidextrous Funkslinging", "Curse of Weaksauce"],
    properties: { "boomBoxSong": "Total Eclipse of Your Meat" },
)"#;

#[test]
fn programs_compile_identically_from_one_snapshot() {
    let world = load(GOO_WORLD);
    let config = AgentConfig::default();

    let programs: [Program; 2] = [|c| c.standard(), |c| c.hard()];
    for program in programs {
        let first = program(&CombatCompiler::new(&world, &config)).compile();
        let second = program(&CombatCompiler::new(&world.clone(), &config)).compile();

        assert_eq!(first, second);
        assert_eq!(script_digest(&first), script_digest(&second));
    }
}

#[test]
fn programs_end_in_attack_and_repeat() {
    let world = load(GOO_WORLD);
    let config = AgentConfig::default();
    let compiler = CombatCompiler::new(&world, &config);

    let standard = compiler.standard().compile();
    let hard = compiler.hard().compile();

    assert!(standard.as_str().ends_with("attack;repeat;"));
    assert!(hard.as_str().ends_with("attack;repeat;"));
    assert_ne!(standard, hard);
}

#[test]
fn standard_program_reflects_loaded_state() {
    let world = load(GOO_WORLD);
    let config = AgentConfig::default();
    let script = CombatCompiler::new(&world, &config).standard().compile();

    assert!(script.as_str().contains("Sing Along"));
    assert!(script.as_str().contains("Weaksauce"));
    // Equal buffed stats keep the first listed finisher.
    assert!(script.as_str().contains("skill Nanoshock;repeat;"));
    assert!(!script.as_str().contains("Audioclasm"));

    let bare = CombatCompiler::new(&WorldSnapshot::new(), &config)
        .standard()
        .compile();
    assert!(!bare.as_str().contains("Sing Along"));
}
