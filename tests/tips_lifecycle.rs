mod common;

use common::{advance_ms, local, root_children, tree, tree_with_sidebar};
use std::sync::Arc;
use std::time::Duration;
use tui_overlays::host::SharedTree;
use tui_overlays::overlay::AttachmentTarget;
use tui_overlays::tips::{TipId, TipOptions, TipsController, TipsDefaults};
use tui_overlays::OverlayError;

fn tip(content: &str, ms: u64) -> TipOptions {
    TipOptions::new(content).duration(Duration::from_millis(ms))
}

fn contents(tips: &TipsController) -> Vec<String> {
    tips.tips().into_iter().map(|tip| tip.content).collect()
}

fn rendered_contents(tree: &SharedTree) -> Vec<String> {
    let guard = tree.lock();
    guard
        .mounted()
        .filter_map(|(_, fragment)| fragment.as_tip_list().cloned())
        .flat_map(|list| list.tips.into_iter().map(|view| view.content))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn three_tips_expire_in_duration_order() {
    local(async {
        let tree = tree();
        let tips = TipsController::new(Arc::clone(&tree), TipsDefaults::default());

        tips.push_tip(tip("T1", 100)).unwrap();
        tips.push_tip(tip("T2", 50)).unwrap();
        tips.push_tip(tip("T3", 200)).unwrap();
        assert_eq!(root_children(&tree), 1);

        advance_ms(60).await;
        assert_eq!(contents(&tips), vec!["T1", "T3"]);
        assert_eq!(rendered_contents(&tree), vec!["T1", "T3"]);

        advance_ms(190).await;
        assert!(tips.is_empty());
        assert!(!tips.is_mounted());
        assert_eq!(tips.pending_timers(), 0);
        assert_eq!(root_children(&tree), 0);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn shorter_duration_is_removed_first_and_order_is_kept() {
    local(async {
        let tips = TipsController::new(tree(), TipsDefaults::default());

        tips.push_tip(tip("long", 300)).unwrap();
        tips.push_tip(tip("short", 100)).unwrap();
        tips.push_tip(tip("tail", 400)).unwrap();

        advance_ms(150).await;
        assert_eq!(contents(&tips), vec!["long", "tail"]);
        advance_ms(200).await;
        assert_eq!(contents(&tips), vec!["tail"]);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn default_duration_is_exactly_five_seconds() {
    local(async {
        let tips = TipsController::new(tree(), TipsDefaults::default());
        tips.push_tip("hello").unwrap();

        advance_ms(4999).await;
        assert_eq!(tips.len(), 1);
        advance_ms(1).await;
        assert!(tips.is_empty());
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn controller_default_duration_applies() {
    local(async {
        let defaults = TipsDefaults {
            default_duration: Some(Duration::from_millis(300)),
            ..TipsDefaults::default()
        };
        let tips = TipsController::new(tree(), defaults);
        tips.push_tip("hello").unwrap();
        tips.push_tip(tip("explicit", 1000)).unwrap();

        advance_ms(300).await;
        assert_eq!(contents(&tips), vec!["explicit"]);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn remove_all_cancels_every_timer() {
    local(async {
        let tree = tree();
        let tips = TipsController::new(Arc::clone(&tree), TipsDefaults::default());
        for (index, ms) in [100, 200, 300].into_iter().enumerate() {
            tips.push_tip(tip(&format!("T{index}"), ms)).unwrap();
        }

        tips.remove_all_tips();
        assert!(tips.is_empty());
        assert_eq!(tips.pending_timers(), 0);
        assert_eq!(root_children(&tree), 0);

        let late = tips.push_tip(tip("late", 1000)).unwrap();
        advance_ms(500).await;
        let remaining: Vec<TipId> = tips.tips().into_iter().map(|tip| tip.id).collect();
        assert_eq!(remaining, vec![late]);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn manual_removal_cancels_its_timer() {
    local(async {
        let tips = TipsController::new(tree(), TipsDefaults::default());
        let first = tips.push_tip(tip("first", 100)).unwrap();
        tips.push_tip(tip("second", 1000)).unwrap();

        assert!(tips.remove_tip(first));
        assert_eq!(tips.pending_timers(), 1);
        advance_ms(200).await;
        assert_eq!(contents(&tips), vec!["second"]);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn overlay_remounts_after_teardown() {
    local(async {
        let tree = tree();
        let tips = TipsController::new(Arc::clone(&tree), TipsDefaults::default());

        let id = tips.push_tip(tip("one", 1000)).unwrap();
        tips.remove_tip(id);
        assert!(!tips.is_mounted());

        tips.push_tip(tip("two", 1000)).unwrap();
        assert!(tips.is_mounted());
        assert_eq!(root_children(&tree), 1);
        assert_eq!(rendered_contents(&tree), vec!["two"]);
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn tips_relocate_into_region() {
    local(async {
        let (tree, sidebar) = tree_with_sidebar();
        let defaults = TipsDefaults {
            attach: Some(AttachmentTarget::selector("#sidebar")),
            ..TipsDefaults::default()
        };
        let tips = TipsController::new(Arc::clone(&tree), defaults);
        tips.push_tip("saved").unwrap();

        let guard = tree.lock();
        let rendered = guard.rendered_at(sidebar);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].as_tip_list().map(|l| l.tips.len()), Some(1));
    })
    .await;
}

#[tokio::test(start_paused = true)]
async fn missing_target_fails_first_push() {
    local(async {
        let tree = tree();
        let defaults = TipsDefaults {
            attach: Some(AttachmentTarget::selector("#toasts")),
            ..TipsDefaults::default()
        };
        let tips = TipsController::new(Arc::clone(&tree), defaults);

        assert_eq!(
            tips.push_tip("lost"),
            Err(OverlayError::TargetNotFound {
                selector: "#toasts".into()
            })
        );
        assert!(tips.is_empty());
        assert_eq!(tips.pending_timers(), 0);
        assert_eq!(root_children(&tree), 0);
    })
    .await;
}
