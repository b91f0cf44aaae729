//! Ranking: idf, keyword boosts and tie order.

use super::common::{assert_sorted_by_score, grocery_catalog, search_all, spu_ids};
use shopseek::testing::{engine_with, make_row, try_engine_with};
use shopseek::{BoostTerm, KeywordBoosts, TriggerBoost};

#[test]
fn cooking_oil_outranks_engine_oil() {
    let t = grocery_catalog();
    // 食用油 ×10, 机油 ×2, 酱油 unboosted
    assert_eq!(spu_ids(&t.engine, "油"), [1, 2, 3]);
}

#[test]
fn boost_multiplies_the_base_contribution() {
    let t = grocery_catalog();
    let page = search_all(&t.engine, "油");
    let base = (7.0f64 / 3.0).ln() * 0.5;
    assert!((page.hits[0].score - base * 10.0).abs() < 1e-9);
    assert!((page.hits[1].score - base * 2.0).abs() < 1e-9);
    assert!((page.hits[2].score - base).abs() < 1e-9);
}

#[test]
fn rice_boost_prefers_dahmi_over_xiaomi() {
    let t = grocery_catalog();
    let ids = spu_ids(&t.engine, "米");
    assert_eq!(ids, [4, 5]);
}

#[test]
fn empty_boost_table_is_plain_tfidf() {
    let rows = vec![
        make_row(1, "壳牌 机油"),
        make_row(2, "金龙鱼 食用油"),
        make_row(3, "大米"),
    ];
    let t = try_engine_with(rows, Vec::new(), KeywordBoosts::empty()).unwrap();
    // equal scores, so source order
    assert_eq!(spu_ids(&t.engine, "油"), [1, 2]);
}

#[test]
fn custom_boost_table() {
    let boosts = KeywordBoosts::from_triggers(vec![TriggerBoost {
        trigger: "茶".into(),
        terms: vec![BoostTerm {
            term: "绿茶".into(),
            weight: 5.0,
        }],
    }])
    .unwrap();
    let rows = vec![
        make_row(1, "红茶 200g"),
        make_row(2, "西湖 绿茶 250g"),
        make_row(3, "咖啡"),
    ];
    let t = try_engine_with(rows, Vec::new(), boosts).unwrap();
    assert_eq!(spu_ids(&t.engine, "茶"), [2, 1]);
}

#[test]
fn ties_keep_first_contribution_order() {
    let t = engine_with(
        vec![
            make_row(30, "大米 a"),
            make_row(20, "大米 b"),
            make_row(10, "大米 c"),
            make_row(40, "面条"),
            make_row(50, "花生油"),
        ],
        Vec::new(),
    );
    assert_eq!(spu_ids(&t.engine, "大米"), [30, 20, 10]);
}

#[test]
fn words_outweigh_their_characters() {
    let t = engine_with(
        vec![
            make_row(1, "苹 果 汁"),
            make_row(2, "苹果"),
            make_row(3, "香蕉"),
            make_row(4, "梨"),
            make_row(5, "葡萄"),
        ],
        Vec::new(),
    );
    // "苹果" as a word only exists in product 2
    assert_eq!(spu_ids(&t.engine, "苹果"), [2]);
    // every query token is scored; the word hit carries more weight
    let page = search_all(&t.engine, "苹果 苹");
    assert_eq!(page.spu_ids()[0], 2);
    assert_sorted_by_score(&page);
}

#[test]
fn top_k_caps_candidates() {
    let t = grocery_catalog();
    let page = t.engine.search(t.engine.request("油").top_k(2)).unwrap();
    assert_eq!(page.spu_ids(), [1, 2]);
    assert_eq!(page.total, 2);
}

fn olive_boosts(trigger: &str, term: &str) -> KeywordBoosts {
    KeywordBoosts::from_triggers(vec![TriggerBoost {
        trigger: trigger.into(),
        terms: vec![BoostTerm {
            term: term.into(),
            weight: 3.0,
        }],
    }])
    .unwrap()
}

#[test]
fn configured_boosts_match_regardless_of_case() {
    let rows = vec![
        make_row(1, "OLIVE oil"),
        make_row(2, "engine oil"),
        make_row(3, "x"),
    ];
    for (trigger, term, query) in [("oil", "Olive", "oil"), ("Oil", "olive", "Oil")] {
        let t = try_engine_with(rows.clone(), Vec::new(), olive_boosts(trigger, term)).unwrap();
        let page = search_all(&t.engine, query);
        assert_eq!(page.spu_ids(), [1, 2], "trigger {:?} term {:?}", trigger, term);
        let ratio = page.hits[0].score / page.hits[1].score;
        assert!((ratio - 3.0).abs() < 1e-9, "ratio {} for trigger {:?}", ratio, trigger);
    }
}
