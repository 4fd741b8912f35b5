use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use showcard::{og, project, showcase};

fn golden_path() -> PathBuf {
    PathBuf::from("tests/goldens/expected/cards.json")
}

fn digest_current_cards() -> BTreeMap<String, String> {
    let mut digests = BTreeMap::new();

    let png = og::render().encode_png().expect("encode og card");
    digests.insert("og-image".to_string(), hex::encode(Sha256::digest(&png)));

    let fonts = showcase::Fonts::resolve();
    for p in project::showcase_projects() {
        let png = showcase::render_card(&p, &fonts)
            .encode_png()
            .expect("encode showcase card");
        digests.insert(p.slug.clone(), hex::encode(Sha256::digest(&png)));
    }
    digests
}

// Card digests depend on which system fonts the resolver finds, so goldens
// are machine-local fixtures, refreshed with UPDATE_GOLDENS=1.
#[test]
fn golden_card_digests_match_fixture() {
    let digests = digest_current_cards();
    let expected_path = golden_path();

    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all(expected_path.parent().expect("golden parent")).ok();
        let json = serde_json::to_string_pretty(&digests).expect("serialize digests");
        fs::write(&expected_path, json).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    let expected: BTreeMap<String, String> =
        serde_json::from_str(&exp).expect("invalid golden JSON");
    assert_eq!(digests, expected);
}
