use dear_progress::*;
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn host() -> (Rc<RecordingSurface>, Rc<dyn Surface>) {
    let rec = Rc::new(RecordingSurface::new());
    let surface: Rc<dyn Surface> = rec.clone();
    (rec, surface)
}

#[test]
fn textures_are_allocated_lazily_on_scheme_pass() {
    let (rec, surface) = host();
    let mut bar = ContinuousProgressBar::new();
    bar.apply_settings(
        &Properties::new()
            .with("fg_texture", "hud/fill")
            .with("bg_texture", "hud/track"),
    );
    assert!(bar.using_textures());
    assert_eq!(rec.live_texture_count(), 0);
    assert!(bar.panel().is_layout_invalid());

    bar.apply_scheme(&StaticScheme::new(), &surface);
    assert_eq!(rec.live_texture_count(), 2);
    let fg = bar.texture_id(TextureSlot::Foreground).unwrap();
    let bg = bar.texture_id(TextureSlot::Background).unwrap();
    assert_eq!(rec.texture_file(fg).as_deref(), Some("vgui/hud/fill"));
    assert_eq!(rec.texture_file(bg).as_deref(), Some("vgui/hud/track"));

    // a second scheme pass reuses the handles
    bar.apply_scheme(&StaticScheme::new(), &surface);
    assert_eq!(rec.live_texture_count(), 2);
    assert_eq!(bar.texture_id(TextureSlot::Foreground), Some(fg));
}

#[test]
fn dropping_the_bar_releases_textures() {
    let (rec, surface) = host();
    {
        let mut bar = ContinuousProgressBar::new();
        bar.set_image(Some("a"), TextureSlot::Foreground);
        bar.set_image(Some("b"), TextureSlot::Background);
        bar.apply_scheme(&StaticScheme::new(), &surface);
        assert_eq!(rec.live_texture_count(), 2);
    }
    assert_eq!(rec.live_texture_count(), 0);
}

#[test]
fn replacing_an_image_swaps_its_texture() {
    let (rec, surface) = host();
    let mut bar = ContinuousProgressBar::new();
    bar.set_image(Some("a"), TextureSlot::Foreground);
    bar.apply_scheme(&StaticScheme::new(), &surface);
    let old = bar.texture_id(TextureSlot::Foreground).unwrap();

    bar.set_image(Some("b"), TextureSlot::Foreground);
    assert!(!rec.is_texture_id_valid(old));
    bar.apply_scheme(&StaticScheme::new(), &surface);
    let new = bar.texture_id(TextureSlot::Foreground).unwrap();
    assert_ne!(old, new);
    assert_eq!(rec.texture_file(new).as_deref(), Some("vgui/b"));
    assert_eq!(rec.live_texture_count(), 1);
}

#[test]
fn externally_deleted_texture_is_not_deleted_twice() {
    let (rec, surface) = host();
    let mut bar = ContinuousProgressBar::new();
    bar.set_image(Some("a"), TextureSlot::Foreground);
    bar.apply_scheme(&StaticScheme::new(), &surface);
    let id = bar.texture_id(TextureSlot::Foreground).unwrap();

    rec.delete_texture_by_id(id);
    let other = rec.create_new_texture_id();
    drop(bar);
    assert!(rec.is_texture_id_valid(other));
}

#[test]
fn settings_round_trip_keeps_image_names() {
    let mut bar = ContinuousProgressBar::new();
    bar.set_progress(0.3);
    bar.set_image(Some("fill"), TextureSlot::Foreground);

    let mut out = Properties::new();
    bar.get_settings(&mut out);
    assert_eq!(out.get_bool("using_textures"), Some(true));
    assert_eq!(out.get_str("fg_texture").as_deref(), Some("fill"));
    assert_eq!(out.get_str("bg_texture").as_deref(), Some(""));

    let mut copy = ContinuousProgressBar::new();
    copy.apply_settings(&out);
    assert!(copy.using_textures());
    assert_eq!(copy.image_name(TextureSlot::Foreground), Some("fill"));
    assert_eq!(copy.image_name(TextureSlot::Background), None);
    assert_eq!(copy.progress(), bar.progress());
}

#[test]
fn using_textures_flag_alone_is_honoured() {
    let mut bar = ContinuousProgressBar::new();
    bar.apply_settings(&Properties::new().with("using_textures", true));
    assert!(bar.using_textures());

    bar.apply_settings(&Properties::new().with("using_textures", "0"));
    assert!(!bar.using_textures());

    // absent key leaves the mode alone
    bar.set_using_textures(true);
    bar.apply_settings(&Properties::new());
    assert!(bar.using_textures());
}

#[test]
fn continuous_paint_traverse_skips_border_in_texture_mode() {
    let (rec, surface) = host();
    let scheme = StaticScheme::new().with_border("ButtonDepressedBorder", "depressed");
    let mut bar = ContinuousProgressBar::new();
    bar.panel_mut().set_size(100, 10);
    bar.set_progress(0.5);
    bar.apply_scheme(&scheme, &surface);

    bar.paint_traverse(&*rec);
    assert!(matches!(rec.commands().last(), Some(DrawCmd::Border { .. })));
    rec.take_commands();

    bar.set_image(Some("fill"), TextureSlot::Foreground);
    bar.apply_scheme(&scheme, &surface);
    bar.paint_traverse(&*rec);
    assert_eq!(rec.textured_rects(), vec![Rect::new(0, 0, 100, 10), Rect::new(0, 0, 50, 10)]);
    assert!(!rec.commands().iter().any(|cmd| matches!(cmd, DrawCmd::Border { .. })));
}
