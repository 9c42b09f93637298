//! Software-rendered viewer window using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌──────────────────────────────────────────────────┬──────────────┐
//! │  MODE / camera readout                           │ HAND PREVIEW │
//! │                                                  │  (landmark   │
//! │                [projected point cloud]           │   dots)      │
//! │                                                  ├──────────────┤
//! │                                                  │              │
//! │  status bar                                      │              │
//! │  key legend                                      │              │
//! └──────────────────────────────────────────────────┴──────────────┘
//! ```
//!
//! The renderer is deliberately simple: rotate, perspective-divide, splat
//! 2×2 points.  All scene parameters come in as absolute values from the
//! engine's `ControlState`; rotation angles are wrapped here at draw time.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use std::sync::mpsc::Sender;

use gesture_engine::{Command, ControlState, EffectParams, Fragment};
use hand_signals::{is_fist, FrameObservation, HandObservation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::model::{PointCloud, SceneModels};
use crate::source::SimInput;
use crate::ViewerError;

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W: usize = 1280;
pub const WIN_H: usize = 720;
const PREVIEW_W: usize = 230;
const PREVIEW_H: usize = 170;
const STATUS_Y: usize = WIN_H - 44;

const BG_COLOR: u32 = 0xFF0D0D1A;
const PREVIEW_BG: u32 = 0xFF16213E;
const TEXT_BG: u32 = 0xFF0F3460;
const WHITE: u32 = 0xFFFFFFFF;
const RED: u32 = 0xFFFF3020;
const STRAND_A_COLOR: u32 = 0xFF00E5E5; // cyan
const STRAND_B_COLOR: u32 = 0xFFE500E5; // magenta
const SUBSTRATE_COLOR: u32 = 0xFF3380FF;
const HELICASE_COLOR: u32 = 0xFF33FF80;
const LEFT_HAND_COLOR: u32 = 0xFF4ADE6A;
const RIGHT_HAND_COLOR: u32 = 0xFF5A8CFF;

/// Per-frame sim-input step sizes.
const PALM_STEP: f32 = 0.012;
const PINCH_STEP: f32 = 0.004;
/// Mouse-drag degrees per pixel, matching the alternative input path.
const MOUSE_GAIN: f32 = 0.5;

// ════════════════════════════════════════════════════════════════════════════
// AppEvent / Hud
// ════════════════════════════════════════════════════════════════════════════

/// What the window hands back to the run loop each frame.  Synthetic-hand
/// inputs go straight to the sim channel instead.
#[derive(Clone, Copy, Debug)]
pub enum AppEvent {
    Command(Command),
    ToggleHandControl,
    TogglePreview,
    ToggleFullscreen,
    Quit,
}

/// Frame-scoped HUD values owned by the run loop.
pub struct Hud<'a> {
    pub status: &'a str,
    pub hand_control: bool,
    pub show_preview: bool,
    pub cooldown: u32,
    pub auto_speed: f32,
    pub fragment_lifespan: f32,
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    buf: Vec<u32>,
    sim_tx: Sender<SimInput>,
    fullscreen: bool,
    last_mouse: Option<(f32, f32)>,
    shake_rng: StdRng,
}

impl Visualizer {
    pub fn new(fullscreen: bool, sim_tx: Sender<SimInput>) -> Result<Self, ViewerError> {
        Ok(Visualizer {
            window: create_window(fullscreen)?,
            buf: vec![BG_COLOR; WIN_W * WIN_H],
            sim_tx,
            fullscreen,
            last_mouse: None,
            shake_rng: StdRng::from_entropy(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Recreate the window borderless (or back).  minifb cannot restyle a
    /// live window, so this swaps it out.
    pub fn toggle_fullscreen(&mut self) -> Result<(), ViewerError> {
        self.fullscreen = !self.fullscreen;
        self.window = create_window(self.fullscreen)?;
        Ok(())
    }

    // ── Input ─────────────────────────────────────────────────────────────

    /// Poll keyboard and mouse.  Synthetic-hand keys are forwarded to the
    /// sim channel; everything else comes back as [`AppEvent`]s.
    pub fn poll_input(&mut self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        if !self.window.is_open() {
            events.push(AppEvent::Quit);
            return events;
        }

        let one_shot = |w: &Window, k: Key| w.is_key_pressed(k, KeyRepeat::No);

        if one_shot(&self.window, Key::Q) || one_shot(&self.window, Key::Escape) {
            events.push(AppEvent::Quit);
        }
        if one_shot(&self.window, Key::C) {
            events.push(AppEvent::TogglePreview);
        }
        if one_shot(&self.window, Key::H) {
            events.push(AppEvent::ToggleHandControl);
        }
        if one_shot(&self.window, Key::R) {
            events.push(AppEvent::Command(Command::ResetCamera));
        }
        if one_shot(&self.window, Key::A) {
            events.push(AppEvent::Command(Command::CycleAutoRotation));
        }
        if one_shot(&self.window, Key::F) {
            events.push(AppEvent::ToggleFullscreen);
        }

        // ── Synthetic right hand: arrows + W/S ────────────────────────────
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.window.is_key_down(Key::Left) {
            dx -= PALM_STEP;
        }
        if self.window.is_key_down(Key::Right) {
            dx += PALM_STEP;
        }
        if self.window.is_key_down(Key::Up) {
            dy -= PALM_STEP;
        }
        if self.window.is_key_down(Key::Down) {
            dy += PALM_STEP;
        }
        if dx != 0.0 || dy != 0.0 {
            let _ = self.sim_tx.send(SimInput::MoveRight { dx, dy });
        }
        if self.window.is_key_down(Key::W) {
            let _ = self.sim_tx.send(SimInput::PinchRight(PINCH_STEP));
        }
        if self.window.is_key_down(Key::S) {
            let _ = self.sim_tx.send(SimInput::PinchRight(-PINCH_STEP));
        }

        // ── Synthetic left hand: I/J/K/L + E/D ────────────────────────────
        let mut lx = 0.0;
        let mut ly = 0.0;
        if self.window.is_key_down(Key::J) {
            lx -= PALM_STEP;
        }
        if self.window.is_key_down(Key::L) {
            lx += PALM_STEP;
        }
        if self.window.is_key_down(Key::I) {
            ly -= PALM_STEP;
        }
        if self.window.is_key_down(Key::K) {
            ly += PALM_STEP;
        }
        if lx != 0.0 || ly != 0.0 {
            let _ = self.sim_tx.send(SimInput::MoveLeft { dx: lx, dy: ly });
        }
        if self.window.is_key_down(Key::E) {
            let _ = self.sim_tx.send(SimInput::PinchLeft(PINCH_STEP));
        }
        if self.window.is_key_down(Key::D) {
            let _ = self.sim_tx.send(SimInput::PinchLeft(-PINCH_STEP));
        }

        // Touch is level-triggered: held key = held contact.
        let _ = self
            .sim_tx
            .send(SimInput::TouchHeld(self.window.is_key_down(Key::T)));

        if one_shot(&self.window, Key::G) {
            let _ = self.sim_tx.send(SimInput::ToggleLeftFist);
        }
        if one_shot(&self.window, Key::X) {
            let _ = self.sim_tx.send(SimInput::ToggleLeft);
        }
        if one_shot(&self.window, Key::Z) {
            let _ = self.sim_tx.send(SimInput::ToggleRight);
        }

        // ── Mouse: drag rotates, wheel zooms ──────────────────────────────
        if self.window.get_mouse_down(MouseButton::Left) {
            if let Some(pos) = self.window.get_mouse_pos(MouseMode::Discard) {
                if let Some((px, py)) = self.last_mouse {
                    let ddx = (pos.0 - px) * MOUSE_GAIN;
                    let ddy = (pos.1 - py) * MOUSE_GAIN;
                    if ddx != 0.0 || ddy != 0.0 {
                        events.push(AppEvent::Command(Command::RotateBy { dx: ddx, dy: ddy }));
                    }
                }
                self.last_mouse = Some(pos);
            }
        } else {
            self.last_mouse = None;
        }
        if let Some((_, wheel_y)) = self.window.get_scroll_wheel() {
            if wheel_y != 0.0 {
                events.push(AppEvent::Command(Command::ZoomBy(-wheel_y)));
            }
        }

        events
    }

    // ── Render ────────────────────────────────────────────────────────────

    pub fn render(
        &mut self,
        state: &ControlState,
        fragments: &[Fragment],
        scene: &SceneModels,
        frame: &FrameObservation,
        hud: &Hud<'_>,
    ) {
        self.buf.fill(BG_COLOR);
        let proj = Projector::new(state);

        match &state.effect {
            EffectParams::Bacteria {
                shake_intensity,
                color_blend,
                opacity,
            } => self.draw_bacteria(&proj, &scene.bacteria, *shake_intensity, *color_blend, *opacity),

            EffectParams::Dna {
                separation,
                helicase,
            } => self.draw_dna(&proj, scene, *separation, *helicase),

            EffectParams::Enzyme {
                attachment,
                position,
                ..
            } => self.draw_enzyme(&proj, scene, *attachment, *position),

            EffectParams::Pcr { .. } => {
                self.draw_pcr(&proj, &scene.pcr_fragment, fragments, hud.fragment_lifespan)
            }
        }

        self.draw_hud(state, hud);
        if hud.show_preview {
            self.draw_preview(frame);
        }

        self.window.update_with_buffer(&self.buf, WIN_W, WIN_H).ok();
    }

    // ── Scenes ────────────────────────────────────────────────────────────

    fn draw_bacteria(
        &mut self,
        proj: &Projector,
        cloud: &PointCloud,
        shake: f32,
        color_blend: f32,
        opacity: f32,
    ) {
        let color = blend(WHITE, RED, color_blend);
        // Opacity is emulated by blending toward the background.
        let color = blend(BG_COLOR, color, opacity.clamp(0.0, 1.0));
        let strength = shake * 0.3;

        for &p in cloud.points() {
            let p = if shake > 0.01 {
                (
                    p.0 + self.shake_rng.sample::<f32, _>(StandardNormal) * strength,
                    p.1 + self.shake_rng.sample::<f32, _>(StandardNormal) * strength,
                    p.2 + self.shake_rng.sample::<f32, _>(StandardNormal) * strength,
                )
            } else {
                p
            };
            if let Some((sx, sy)) = proj.project(p) {
                self.draw_point(sx, sy, color);
            }
        }
    }

    fn draw_dna(&mut self, proj: &Projector, scene: &SceneModels, separation: f32, helicase: f32) {
        let shift = separation * 10.0;
        for &p in scene.strand_a.points() {
            if let Some((sx, sy)) = proj.project((p.0 - shift, p.1, p.2)) {
                self.draw_point(sx, sy, STRAND_A_COLOR);
            }
        }
        for &p in scene.strand_b.points() {
            if let Some((sx, sy)) = proj.project((p.0 + shift, p.1, p.2)) {
                self.draw_point(sx, sy, STRAND_B_COLOR);
            }
        }
        // The helicase rides the strand axis as the hands spread apart.
        let hz = -8.0 + 18.0 * helicase;
        for &p in scene.helicase.points() {
            if let Some((sx, sy)) = proj.project((p.0, p.1, p.2 + hz)) {
                self.draw_point(sx, sy, HELICASE_COLOR);
            }
        }
    }

    fn draw_enzyme(
        &mut self,
        proj: &Projector,
        scene: &SceneModels,
        attachment: f32,
        position: (f32, f32, f32),
    ) {
        for &p in scene.substrate.points() {
            if let Some((sx, sy)) = proj.project(p) {
                self.draw_point(sx, sy, SUBSTRATE_COLOR);
            }
        }
        let color = blend(WHITE, HELICASE_COLOR, attachment);
        for &p in scene.enzyme.points() {
            let q = (p.0 + position.0, p.1 + position.1, p.2 + position.2);
            if let Some((sx, sy)) = proj.project(q) {
                self.draw_point(sx, sy, color);
            }
        }
    }

    fn draw_pcr(
        &mut self,
        proj: &Projector,
        template: &PointCloud,
        fragments: &[Fragment],
        lifespan: f32,
    ) {
        for fragment in fragments {
            let life_ratio = (fragment.life as f32 / lifespan.max(1.0)).clamp(0.0, 1.0);
            let color = rgb_f(life_ratio, 0.2, 1.0 - life_ratio);
            for &p in template.points() {
                let q = rotate_axis_angle(p, fragment.axis, fragment.angle);
                let q = (
                    q.0 + fragment.position.0,
                    q.1 + fragment.position.1,
                    q.2 + fragment.position.2,
                );
                if let Some((sx, sy)) = proj.project(q) {
                    self.draw_point(sx, sy, color);
                }
            }
        }
    }

    // ── HUD ───────────────────────────────────────────────────────────────

    fn draw_hud(&mut self, state: &ControlState, hud: &Hud<'_>) {
        let header = format!(
            "MODE {}   DIST {:.1}   SPIN {:.1}",
            state.mode.name(),
            state.camera_distance,
            hud.auto_speed,
        );
        self.draw_label(&header, 12, 12, 0xFFAADDFF);

        if hud.cooldown > 0 {
            let note = format!("COOLDOWN {}", hud.cooldown);
            self.draw_label(&note, 12, 28, 0xFFFFD700);
        }
        if !hud.hand_control {
            self.draw_label("HANDS OFF", 12, 44, RED);
        }

        self.fill_rect(0, STATUS_Y, WIN_W, WIN_H - STATUS_Y, TEXT_BG);
        self.draw_label(hud.status, 12, STATUS_Y + 8, 0xFFEEEEEE);
        self.draw_label(
            "ARROWS+W/S=RIGHT HAND  IJKL+E/D=LEFT  T=TOUCH  G=FIST  C=PREVIEW  H=HANDS  R=RESET  A=SPIN  F=FULL  Q=QUIT",
            12,
            WIN_H - 16,
            0xFF888888,
        );
    }

    /// Landmark dots for both hands in the corner panel — green left,
    /// blue right, matching the camera-overlay convention.
    fn draw_preview(&mut self, frame: &FrameObservation) {
        let x0 = WIN_W - PREVIEW_W;
        self.fill_rect(x0, 0, PREVIEW_W, PREVIEW_H, PREVIEW_BG);
        self.draw_border(x0, 0, PREVIEW_W, PREVIEW_H, TEXT_BG);
        self.draw_label("HANDS", x0 + 8, 6, 0xFFFFD700);

        if let Some(hand) = &frame.left {
            self.draw_hand_dots(hand, x0, LEFT_HAND_COLOR);
            if is_fist(hand) {
                self.draw_label("FIST", x0 + 8, PREVIEW_H - 14, LEFT_HAND_COLOR);
            }
        }
        if let Some(hand) = &frame.right {
            self.draw_hand_dots(hand, x0, RIGHT_HAND_COLOR);
        }
        if frame.is_empty() {
            self.draw_label("NO HANDS", x0 + 8, PREVIEW_H / 2, 0xFF888888);
        }
    }

    fn draw_hand_dots(&mut self, hand: &HandObservation, panel_x: usize, color: u32) {
        for lm in &hand.landmarks {
            let px = panel_x + 4 + (lm.x.clamp(0.0, 1.0) * (PREVIEW_W - 8) as f32) as usize;
            let py = 18 + (lm.y.clamp(0.0, 1.0) * (PREVIEW_H - 24) as f32) as usize;
            self.draw_point(px as i32, py as i32, color);
        }
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    /// 2×2 splat.
    fn draw_point(&mut self, x: i32, y: i32, color: u32) {
        for dy in 0..2i32 {
            for dx in 0..2i32 {
                let (px, py) = (x + dx, y + dy);
                if px >= 0 && py >= 0 && (px as usize) < WIN_W && (py as usize) < WIN_H {
                    self.buf[py as usize * WIN_W + px as usize] = color;
                }
            }
        }
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < WIN_W && y < WIN_H {
            self.buf[y * WIN_W + x] = color;
        }
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(WIN_H) {
            for col in x..(x + w).min(WIN_W) {
                self.buf[row * WIN_W + col] = color;
            }
        }
    }

    fn draw_border(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for col in x..(x + w).min(WIN_W) {
            self.set_pixel(col, y, color);
            self.set_pixel(col, y + h - 1, color);
        }
        for row in y..(y + h).min(WIN_H) {
            self.set_pixel(x, row, color);
            self.set_pixel(x + w - 1, row, color);
        }
    }

    /// 3×5 bitmap font drawn at 1× — labels only, no text layout.
    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.set_pixel(cx + col, y + row, color);
                    }
                }
            }
            cx += 4;
            if cx + 4 > WIN_W {
                break;
            }
        }
    }
}

fn create_window(fullscreen: bool) -> Result<Window, ViewerError> {
    let mut window = Window::new(
        "Cell Viewer — dual-hand gesture control",
        WIN_W,
        WIN_H,
        WindowOptions {
            resize: false,
            borderless: fullscreen,
            ..WindowOptions::default()
        },
    )
    .map_err(|e| ViewerError::Window(e.to_string()))?;
    // ~60 fps
    window.limit_update_rate(Some(std::time::Duration::from_millis(16)));
    Ok(window)
}

// ════════════════════════════════════════════════════════════════════════════
// Projection
// ════════════════════════════════════════════════════════════════════════════

/// Rotate-then-perspective projector for one frame's camera pose.
/// Accumulated rotation angles are wrapped into [0, 360) here.
struct Projector {
    cos_rx: f32,
    sin_rx: f32,
    cos_ry: f32,
    sin_ry: f32,
    distance: f32,
    focal: f32,
}

impl Projector {
    fn new(state: &ControlState) -> Self {
        let rx = state.camera_rotation_x.rem_euclid(360.0).to_radians();
        let ry = state.camera_rotation_y.rem_euclid(360.0).to_radians();
        Projector {
            cos_rx: rx.cos(),
            sin_rx: rx.sin(),
            cos_ry: ry.cos(),
            sin_ry: ry.sin(),
            distance: state.camera_distance,
            // 45° vertical field of view.
            focal: (WIN_H as f32 / 2.0) / (22.5f32.to_radians().tan()),
        }
    }

    /// World point → screen pixel, or `None` when behind the camera.
    fn project(&self, p: (f32, f32, f32)) -> Option<(i32, i32)> {
        // Y rotation, then X — the same order the camera pose is defined in.
        let x1 = p.0 * self.cos_ry + p.2 * self.sin_ry;
        let z1 = -p.0 * self.sin_ry + p.2 * self.cos_ry;
        let y2 = p.1 * self.cos_rx - z1 * self.sin_rx;
        let z2 = p.1 * self.sin_rx + z1 * self.cos_rx;

        let depth = self.distance - z2;
        if depth < 0.5 {
            return None;
        }
        let sx = WIN_W as f32 / 2.0 + self.focal * x1 / depth;
        let sy = WIN_H as f32 / 2.0 - self.focal * y2 / depth;
        if !(sx.is_finite() && sy.is_finite()) {
            return None;
        }
        Some((sx as i32, sy as i32))
    }
}

/// Rodrigues rotation of `p` around the unit `axis` by `angle_deg`.
fn rotate_axis_angle(p: (f32, f32, f32), axis: (f32, f32, f32), angle_deg: f32) -> (f32, f32, f32) {
    let a = angle_deg.to_radians();
    let (sin_a, cos_a) = a.sin_cos();
    let (kx, ky, kz) = axis;
    let dot = kx * p.0 + ky * p.1 + kz * p.2;
    let cross = (
        ky * p.2 - kz * p.1,
        kz * p.0 - kx * p.2,
        kx * p.1 - ky * p.0,
    );
    (
        p.0 * cos_a + cross.0 * sin_a + kx * dot * (1.0 - cos_a),
        p.1 * cos_a + cross.1 * sin_a + ky * dot * (1.0 - cos_a),
        p.2 * cos_a + cross.2 * sin_a + kz * dot * (1.0 - cos_a),
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Color helpers
// ════════════════════════════════════════════════════════════════════════════

/// Alpha-blend two ARGB colors; `t = 0` → all `a`, `t = 1` → all `b`.
fn blend(a: u32, b: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |ca: u32, cb: u32| (ca as f32 * (1.0 - t) + cb as f32 * t) as u32;
    let (ar, ag, ab) = ((a >> 16) & 0xFF, (a >> 8) & 0xFF, a & 0xFF);
    let (br, bg, bb) = ((b >> 16) & 0xFF, (b >> 8) & 0xFF, b & 0xFF);
    0xFF000000 | (mix(ar, br) << 16) | (mix(ag, bg) << 8) | mix(ab, bb)
}

/// Pack float RGB in [0, 1] into opaque ARGB.
fn rgb_f(r: f32, g: f32, b: f32) -> u32 {
    let to8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u32;
    0xFF000000 | (to8(r) << 16) | (to8(g) << 8) | to8(b)
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '%' => [0b101, 0b001, 0b010, 0b100, 0b101],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
