//! Handles the state for the viewer.

use crate::camera::{rotate, Camera, Projected};
use crate::globe::globe;

use generator::field::{self, FieldPoint, GalaxyParams, GalaxySetting};
use generator::shape::{asteroid_shape, Shape};
use generator::texture::{self, BodyKind};
use loader::{AsteroidParams, CometParams, Scene};
use simulator::bodies::{Body, BodyId, Layer, Orbiter, Spin};
use simulator::orbit::PATH_SEGMENTS;
use simulator::{Placement, SolarSystem};

use euclid::default::{Point3D, Vector3D};
use ggez::event::{EventHandler, KeyCode};
use ggez::nalgebra::{Point2, Vector2};
use ggez::{
    graphics::{self, spritebatch::SpriteBatch, BlendMode, DrawMode, DrawParam, Drawable, MeshBuilder},
    input::keyboard,
    timer, Context, GameResult,
};
use image::RgbaImage;
use log::{debug, warn};
use rand::{rngs::SmallRng, SeedableRng};

use graphics::Color;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// The state of the viewer.
pub struct State {
    solar_system: SolarSystem,
    /// Every length in the scene got multiplied by this
    scene_scale: f64,
    /// For new bodies and their textures
    rand: SmallRng,

    /// Map textures for every body, painted once when it shows up
    textures: HashMap<BodyId, RgbaImage>,
    /// Textures for rings and cloud layers, by tag
    layer_textures: HashMap<String, RgbaImage>,
    /// The lumpy custom asteroids
    shapes: HashMap<BodyId, Shape>,

    stars: Field,
    galaxy: Field,
    galaxy_params: GalaxyParams,
    /// Where the sun sits in the galaxy
    offset: Vector3D<f64>,
    /// Looking at the whole galaxy instead of the solar system
    galaxy_focus: bool,
    /// How far the galaxy has turned
    galaxy_angle: f64,
    /// Every star and galaxy point is one of these
    sprite: graphics::Image,

    camera: Camera,
    /// Frames simulated per real frame
    speed: f64,
    paused: bool,
    show_orbits: bool,
    /// All the keypresses last frame
    prev_keys: HashSet<KeyCode>,
    /// How many asteroids and comets have been made, for naming them
    made: usize,
}

impl State {
    pub fn new(ctx: &mut Context, scene: Scene) -> GameResult<Self> {
        let mut rand = SmallRng::from_entropy();

        let stars = field::generate(scene.stars.count, &scene.stars.distribution(), &mut rand);
        let galaxy = field::generate(scene.galaxy.count, &scene.galaxy.distribution(), &mut rand);
        debug!(
            "Generated {} stars and {} galaxy points",
            stars.len(),
            galaxy.len()
        );
        let [x, y, z] = scene.position;
        let offset = Vector3D::new(x, y, z);

        let sprite = texture::point_sprite(SPRITE_SIZE);
        let sprite = graphics::Image::from_rgba8(
            ctx,
            SPRITE_SIZE as u16,
            SPRITE_SIZE as u16,
            sprite.as_raw(),
        )?;

        let mut s = State {
            solar_system: SolarSystem::new(scene.bodies),
            scene_scale: scene.scale,
            rand,
            textures: HashMap::new(),
            layer_textures: HashMap::new(),
            shapes: HashMap::new(),
            stars: Field::new(&stars),
            galaxy: Field::new(&galaxy),
            galaxy_params: scene.galaxy,
            offset,
            galaxy_focus: false,
            galaxy_angle: 0.0,
            sprite,
            camera: Camera::new(DEFAULT_DISTANCE, Point3D::origin() + offset),
            speed: 1.0,
            paused: false,
            show_orbits: true,
            prev_keys: HashSet::new(),
            made: 0,
        };

        let built_in: Vec<(BodyId, Body)> = s
            .solar_system
            .orbiters()
            .map(|(id, oer)| (id, oer.body.clone()))
            .collect();
        for (id, body) in built_in {
            s.paint(id, &body);
        }
        for params in scene.asteroids.iter() {
            s.add_asteroid(params);
        }
        for params in scene.comets.iter() {
            s.add_comet(params);
        }
        Ok(s)
    }

    /// Paint the textures a body needs.
    fn paint(&mut self, id: BodyId, body: &Body) {
        let tex = match &body.texture {
            Some(tag) => texture::synthesize(
                tag,
                body.color,
                TEXTURE_WIDTH,
                TEXTURE_HEIGHT,
                &mut self.rand,
            ),
            None => texture::synthesize_kind(
                BodyKind::Other(body.color),
                TEXTURE_WIDTH,
                TEXTURE_HEIGHT,
                &mut self.rand,
            ),
        };
        self.textures.insert(id, tex);

        for layer in body.layers.iter() {
            let (tag, w, h) = match layer {
                Layer::Rings { texture, .. } => (texture, RING_TEXTURE_WIDTH, RING_TEXTURE_HEIGHT),
                Layer::Clouds { texture, .. } => (texture, TEXTURE_WIDTH, TEXTURE_HEIGHT),
            };
            if !self.layer_textures.contains_key(tag) {
                let tex = texture::synthesize(tag, 0xFFFFFF, w, h, &mut self.rand);
                self.layer_textures.insert(tag.clone(), tex);
            }
        }
    }

    fn add_custom(&mut self, oer: Orbiter) -> BodyId {
        let body = oer.body.clone();
        let id = self.solar_system.add_custom(oer);
        self.paint(id, &body);
        id
    }

    fn add_asteroid(&mut self, params: &AsteroidParams) {
        let oer = params.into_orbiter(self.scene_scale, &mut self.rand);
        let radius = oer.body.radius;
        let id = self.add_custom(oer);
        self.shapes
            .insert(id, asteroid_shape(radius, params.irregular, &mut self.rand));
    }

    fn add_comet(&mut self, params: &CometParams) {
        let oer = params.into_orbiter(self.scene_scale, &mut self.rand);
        self.add_custom(oer);
    }

    /// Take away the newest custom body, if there is one.
    fn remove_newest(&mut self) {
        if let Some(&id) = self.solar_system.custom_bodies().last() {
            self.solar_system.remove_custom(id);
            self.textures.remove(&id);
            self.shapes.remove(&id);
        }
    }

    /// Change one galaxy setting, and scatter a new galaxy if its shape changed.
    fn nudge_galaxy(&mut self, setting: GalaxySetting, steps: i32) {
        let params = self.galaxy_params.nudged(setting, steps);
        if self.galaxy_params.reshapes(&params) {
            let points = field::generate(params.count, &params.distribution(), &mut self.rand);
            debug!("New galaxy of {} points: {:?}", points.len(), params);
            self.galaxy = Field::new(&points);
        }
        self.galaxy_params = params;
    }

    /// Where the camera should look and how far back it should sit.
    fn focus(&self) -> (Point3D<f64>, f64) {
        if self.galaxy_focus {
            (Point3D::origin(), self.galaxy_params.radius * GALAXY_DISTANCE)
        } else {
            (Point3D::origin() + self.offset, DEFAULT_DISTANCE)
        }
    }

    /// Whether the key just went down this frame.
    fn tapped(&self, ctx: &Context, key: KeyCode) -> bool {
        keyboard::is_key_pressed(ctx, key) && !self.prev_keys.contains(&key)
    }

    /// Fix the screen space to always have (0, 0) in the corner and (w, h) in the other.
    fn fix_coordinates(&mut self, ctx: &mut Context, width: f32, height: f32) -> GameResult<()> {
        let rect = graphics::Rect::new(0.0, 0.0, width, height);
        graphics::set_screen_coordinates(ctx, rect)
    }

    /// Draw a field of points with the sprite.
    fn draw_field(
        &self,
        ctx: &mut Context,
        field: &Field,
        turn: f64,
        size: f32,
        blend: BlendMode,
    ) -> GameResult<()> {
        let screen = graphics::drawable_size(ctx);
        let (st, ct) = turn.sin_cos();
        let mut batch = SpriteBatch::new(self.sprite.clone());
        let points = field.positions.chunks_exact(3).zip(field.colors.chunks_exact(3));
        for (p, color) in points {
            let (x, y, z) = (p[0] as f64, p[1] as f64, p[2] as f64);
            let turned = Point3D::new(x * ct - z * st, y, x * st + z * ct);
            if let Some(at) = self.camera.project(turned, screen) {
                let (r, g, b) = (color[0], color[1], color[2]);
                batch.add(
                    DrawParam::default()
                        .dest(Point2::new(at.x, at.y))
                        .offset(Point2::new(0.5, 0.5))
                        .scale(Vector2::new(
                            size / SPRITE_SIZE as f32,
                            size / SPRITE_SIZE as f32,
                        ))
                        .color(Color::new(r, g, b, 1.0)),
                );
            }
        }
        batch.set_blend_mode(Some(blend));
        graphics::draw(ctx, &batch, DrawParam::default())
    }

    fn draw_orbits(&self, ctx: &mut Context) -> GameResult<()> {
        let screen = graphics::drawable_size(ctx);
        let mut mb = MeshBuilder::new();
        let mut anything = false;
        let custom = self.solar_system.custom_bodies();
        for (id, oer) in self.solar_system.orbiters() {
            if !shows_orbit(oer, custom.contains(&id)) {
                continue;
            }
            let path: Vec<Point2<f32>> = self
                .solar_system
                .orbit_path(id, PATH_SEGMENTS)
                .into_iter()
                .filter_map(|p| self.camera.project(p + self.offset, screen))
                .map(|at| Point2::new(at.x, at.y))
                .collect();
            if path.len() >= 2 {
                mb.line(&path, 1.0, Color::new(1.0, 1.0, 1.0, ORBIT_ALPHA))?;
                anything = true;
            }
        }
        if anything {
            let mesh = mb.build(ctx)?;
            graphics::draw(ctx, &mesh, DrawParam::default())?;
        }
        Ok(())
    }

    /// Draw a picture centered on a point.
    fn blit(ctx: &mut Context, img: &RgbaImage, at: Point2<f32>, size: f32) -> GameResult<()> {
        let (w, h) = img.dimensions();
        let image = graphics::Image::from_rgba8(ctx, w as u16, h as u16, img.as_raw())?;
        graphics::draw(
            ctx,
            &image,
            DrawParam::default()
                .dest(at)
                .offset(Point2::new(0.5, 0.5))
                .scale(Vector2::new(size / w as f32, size / h as f32)),
        )
    }

    fn draw_body(&self, ctx: &mut Context, placement: &Placement, at: &Projected) -> GameResult<()> {
        let oer = match self.solar_system.orbiter(placement.id) {
            Some(oer) => oer,
            None => return Ok(()),
        };
        let body = &oer.body;
        let screen = graphics::drawable_size(ctx);
        let center = Point2::new(at.x, at.y);
        let radius = (body.radius as f32 * at.scale).max(MIN_RADIUS);
        let light = if body.emissive {
            None
        } else {
            self.camera
                .light_dir(placement.pos, Point3D::origin() + self.offset)
        };

        if body.emissive {
            // A glow around it
            let mut glow = SpriteBatch::new(self.sprite.clone());
            let size = radius * GLOW;
            glow.add(
                DrawParam::default()
                    .dest(center)
                    .offset(Point2::new(0.5, 0.5))
                    .scale(Vector2::new(
                        size / SPRITE_SIZE as f32,
                        size / SPRITE_SIZE as f32,
                    ))
                    .color(Color::from_rgb_u32(body.color)),
            );
            glow.set_blend_mode(Some(BlendMode::Add));
            graphics::draw(ctx, &glow, DrawParam::default())?;
        }

        self.draw_rings(ctx, placement, at, body, true)?;

        if let Some(shape) = self.shapes.get(&placement.id) {
            self.draw_shape(ctx, shape, placement, body.color, screen)?;
        } else if radius <= MIN_RADIUS {
            let dot = MeshBuilder::new()
                .circle(
                    DrawMode::fill(),
                    center,
                    radius,
                    0.1,
                    Color::from_rgb_u32(body.color),
                )
                .build(ctx)?;
            graphics::draw(ctx, &dot, DrawParam::default())?;
        } else if let Some(tex) = self.textures.get(&placement.id) {
            let size = globe_size(radius);
            let ball = globe(tex, size, placement.rotation.y, placement.rotation.x, light);
            Self::blit(ctx, &ball, center, radius * 2.0)?;
        }

        for layer in body.layers.iter() {
            if let Layer::Clouds {
                scale,
                spin,
                texture,
            } = layer
            {
                if let Some(tex) = self.layer_textures.get(texture) {
                    let cloud_radius = radius * *scale as f32;
                    let size = globe_size(cloud_radius);
                    let ball = globe(
                        tex,
                        size,
                        placement.rotation.y * spin,
                        placement.rotation.x,
                        light,
                    );
                    Self::blit(ctx, &ball, center, cloud_radius * 2.0)?;
                }
            }
        }

        self.draw_rings(ctx, placement, at, body, false)
    }

    /// Rings get drawn in two halves so the planet can sit between them.
    fn draw_rings(
        &self,
        ctx: &mut Context,
        placement: &Placement,
        at: &Projected,
        body: &Body,
        back_half: bool,
    ) -> GameResult<()> {
        let screen = graphics::drawable_size(ctx);
        let mut mb = MeshBuilder::new();
        let mut anything = false;

        for layer in body.layers.iter() {
            let (inner, outer, tex) = match layer {
                Layer::Rings {
                    inner,
                    outer,
                    texture,
                } => match self.layer_textures.get(texture) {
                    Some(tex) => (*inner, *outer, tex),
                    None => continue,
                },
                _ => continue,
            };
            let (st, ct) = body.tilt.sin_cos();
            let width = ((outer - inner) as f32 * at.scale / RING_LINES as f32).max(1.0);

            for line in 0..RING_LINES {
                let t = (line as f64 + 0.5) / RING_LINES as f64;
                let r = inner + (outer - inner) * t;
                let row = ((t * tex.height() as f64) as u32).min(tex.height() - 1);
                let image::Rgba([red, green, blue, alpha]) = *tex.get_pixel(0, row);
                let color = Color::from_rgba(red, green, blue, alpha);

                let points: Vec<Option<Projected>> = (0..=RING_SEGMENTS)
                    .map(|i| {
                        let a = i as f64 / RING_SEGMENTS as f64 * 2.0 * std::f64::consts::PI;
                        let (sa, ca) = a.sin_cos();
                        let local = Point3D::new(r * ca, -r * sa * st, r * sa * ct);
                        self.camera
                            .project(placement.pos + local.to_vector(), screen)
                    })
                    .collect();
                for pair in points.windows(2) {
                    if let [Some(a), Some(b)] = pair {
                        let behind = (a.depth + b.depth) / 2.0 > at.depth;
                        if behind == back_half {
                            mb.line(
                                &[Point2::new(a.x, a.y), Point2::new(b.x, b.y)],
                                width,
                                color,
                            )?;
                            anything = true;
                        }
                    }
                }
            }
        }

        if anything {
            let mesh = mb.build(ctx)?;
            graphics::draw(ctx, &mesh, DrawParam::default())?;
        }
        Ok(())
    }

    /// Flat-shaded triangles, facing-away ones skipped.
    fn draw_shape(
        &self,
        ctx: &mut Context,
        shape: &Shape,
        placement: &Placement,
        color: u32,
        screen: (f32, f32),
    ) -> GameResult<()> {
        let corners: Vec<Option<Projected>> = shape
            .vertices
            .iter()
            .map(|&v| {
                let turned = rotate(v, &placement.rotation);
                self.camera
                    .project(placement.pos + turned.to_vector(), screen)
            })
            .collect();
        let base = Color::from_rgb_u32(color);
        let mut mb = MeshBuilder::new();
        let mut anything = false;

        for face in shape.faces.iter() {
            if let (Some(a), Some(b), Some(c)) = (corners[face[0]], corners[face[1]], corners[face[2]]) {
                // Screen y points down, so facing us means clockwise here
                let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
                if cross >= 0.0 {
                    continue;
                }
                let area = cross.abs();
                // Faces turned toward us look brighter. Good enough for a rock.
                let edge = ((b.x - a.x).hypot(b.y - a.y) * (c.x - a.x).hypot(c.y - a.y)).max(1e-6);
                let shade = 0.4 + 0.6 * (area / edge).min(1.0);
                mb.triangles(
                    &[
                        Point2::new(a.x, a.y),
                        Point2::new(b.x, b.y),
                        Point2::new(c.x, c.y),
                    ],
                    Color::new(base.r * shade, base.g * shade, base.b * shade, 1.0),
                )?;
                anything = true;
            }
        }

        if anything {
            let mesh = mb.build(ctx)?;
            graphics::draw(ctx, &mesh, DrawParam::default())?;
        }
        Ok(())
    }

    fn draw_tails(&self, ctx: &mut Context) -> GameResult<()> {
        let screen = graphics::drawable_size(ctx);
        let mut mb = MeshBuilder::new();
        let mut anything = false;
        for &id in self.solar_system.custom_bodies() {
            if let Some(tail) = self.solar_system.tail(id) {
                for particle in tail.particles() {
                    if let Some(at) = self.camera.project(particle.pos + self.offset, screen) {
                        let c = Color::from_rgb_u32(particle.color);
                        let radius = (particle.size as f32 * at.scale * TAIL_PARTICLE_SCALE).max(0.5);
                        mb.circle(
                            DrawMode::fill(),
                            Point2::new(at.x, at.y),
                            radius,
                            0.1,
                            Color::new(c.r, c.g, c.b, particle.opacity as f32 * TAIL_ALPHA),
                        );
                        anything = true;
                    }
                }
            }
        }
        if anything {
            let mesh = mb.build(ctx)?;
            graphics::draw(ctx, &mesh, DrawParam::default())?;
        }
        Ok(())
    }

    /// The list of custom bodies and the controls.
    fn draw_hud(&self, ctx: &mut Context) -> GameResult<()> {
        let mut lines = vec![format!(
            "Asteroids/Comets ({})",
            self.solar_system.custom_bodies().len()
        )];
        lines.extend(
            self.solar_system
                .custom_bodies()
                .iter()
                .filter_map(|&id| self.solar_system.orbiter(id))
                .map(|oer| {
                    let kind = if oer.tail.is_some() { "comet" } else { "asteroid" };
                    format!("  {} ({})", oer.body.name, kind)
                }),
        );
        let g = &self.galaxy_params;
        lines.push(String::new());
        lines.push(format!(
            "Galaxy: {} points  radius {}  thickness {}  rotation {:.2}",
            g.count, g.radius, g.thickness, g.rotation_speed
        ));
        lines.push(HELP.to_string());
        if self.paused {
            lines.push("PAUSED".to_string());
        }
        let text = graphics::Text::new(lines.join("\n"));
        graphics::draw(
            ctx,
            &text,
            DrawParam::default()
                .dest(Point2::new(10.0, 10.0))
                .color(Color::new(1.0, 1.0, 1.0, 0.8)),
        )
    }
}

impl EventHandler for State {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        // Catalog rates are per frame at 60fps. Don't jump ahead after the window's been asleep.
        let seconds = timer::delta(ctx).as_secs_f64().min(MAX_FRAME_DELTA);
        let frames = seconds * FRAMES_PER_SECOND * self.speed;
        if !self.paused {
            self.solar_system.update(frames);
            self.galaxy_angle += self.galaxy_params.spin_per_frame() * frames;
        }

        // Press tilde to reset the view
        if keyboard::is_key_pressed(ctx, KeyCode::Grave) {
            let (target, distance) = self.focus();
            self.camera = Camera::new(distance, target);
            self.speed = 1.0;
        } else {
            if keyboard::is_key_pressed(ctx, KeyCode::Q) {
                self.camera.distance = (self.camera.distance / ZOOM_SPEED).max(MIN_DISTANCE);
            }
            if keyboard::is_key_pressed(ctx, KeyCode::Z) {
                self.camera.distance = (self.camera.distance * ZOOM_SPEED).min(MAX_DISTANCE);
            }
            if keyboard::is_key_pressed(ctx, KeyCode::Left) {
                self.camera.yaw -= TURN_SPEED;
            }
            if keyboard::is_key_pressed(ctx, KeyCode::Right) {
                self.camera.yaw += TURN_SPEED;
            }
            if keyboard::is_key_pressed(ctx, KeyCode::Up) {
                self.camera.pitch = (self.camera.pitch + TURN_SPEED).min(MAX_PITCH);
            }
            if keyboard::is_key_pressed(ctx, KeyCode::Down) {
                self.camera.pitch = (self.camera.pitch - TURN_SPEED).max(-MAX_PITCH);
            }

            // Speed and slow the simulation with []
            if keyboard::is_key_pressed(ctx, KeyCode::LBracket) && self.speed > MIN_SPEED {
                self.speed /= SPEED_SPEED;
            }
            if keyboard::is_key_pressed(ctx, KeyCode::RBracket) && self.speed < MAX_SPEED {
                self.speed *= SPEED_SPEED;
            }
        }

        if self.tapped(ctx, KeyCode::Space) {
            self.paused = !self.paused;
        }
        if self.tapped(ctx, KeyCode::O) {
            self.show_orbits = !self.show_orbits;
        }
        if self.tapped(ctx, KeyCode::F) {
            self.galaxy_focus = !self.galaxy_focus;
            let (target, distance) = self.focus();
            self.camera.target = target;
            self.camera.distance = distance;
        }

        // Galaxy settings, down and up
        let settings = [
            (KeyCode::Key1, KeyCode::Key2, GalaxySetting::Count),
            (KeyCode::Key3, KeyCode::Key4, GalaxySetting::Radius),
            (KeyCode::Key5, KeyCode::Key6, GalaxySetting::Thickness),
            (KeyCode::Key7, KeyCode::Key8, GalaxySetting::RotationSpeed),
        ];
        for &(down, up, setting) in settings.iter() {
            if self.tapped(ctx, down) {
                self.nudge_galaxy(setting, -1);
            }
            if self.tapped(ctx, up) {
                self.nudge_galaxy(setting, 1);
            }
        }
        if self.tapped(ctx, KeyCode::A) {
            self.made += 1;
            let params = AsteroidParams {
                name: format!("Asteroid {}", self.made),
                ..AsteroidParams::default()
            };
            self.add_asteroid(&params);
        }
        if self.tapped(ctx, KeyCode::C) {
            self.made += 1;
            let params = CometParams {
                name: format!("Comet {}", self.made),
                ..CometParams::default()
            };
            self.add_comet(&params);
        }
        if self.tapped(ctx, KeyCode::Back) || self.tapped(ctx, KeyCode::Delete) {
            self.remove_newest();
        }

        // Update previous keys
        self.prev_keys = keyboard::pressed_keys(ctx).to_owned();
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        graphics::clear(ctx, Color::from_rgb_u32(0x000005));

        self.draw_field(ctx, &self.stars, 0.0, STAR_SIZE, BlendMode::Alpha)?;
        self.draw_field(
            ctx,
            &self.galaxy,
            self.galaxy_angle,
            GALAXY_POINT_SIZE,
            BlendMode::Add,
        )?;
        if self.show_orbits {
            self.draw_orbits(ctx)?;
        }

        // Far things first
        let screen = graphics::drawable_size(ctx);
        let mut placed: Vec<(Placement, Projected)> = self
            .solar_system
            .placements()
            .into_iter()
            .map(|p| Placement {
                pos: p.pos + self.offset,
                ..p
            })
            .filter_map(|p| Some((p, self.camera.project(p.pos, screen)?)))
            .collect();
        placed.sort_by(|(_, a), (_, b)| b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal));
        for (placement, at) in placed.iter() {
            self.draw_body(ctx, placement, at)?;
        }

        self.draw_tails(ctx)?;
        self.draw_hud(ctx)?;

        graphics::present(ctx)
    }

    fn resize_event(&mut self, ctx: &mut Context, width: f32, height: f32) {
        if let Err(why) = self.fix_coordinates(ctx, width, height) {
            warn!("Couldn't resize to {}x{}: {}", width, height, why);
        }
    }
}

/// A field, flattened out the way it gets drawn.
struct Field {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl Field {
    fn new(points: &[FieldPoint]) -> Self {
        Self {
            positions: field::positions(points),
            colors: field::colors(points),
        }
    }
}

/// Belt rocks tumble and nobody added them by hand. Their orbits would just be a smudge.
fn shows_orbit(oer: &Orbiter, custom: bool) -> bool {
    custom || oer.spin != Spin::Tumbling
}

/// Big enough to look round, small enough to repaint every frame.
fn globe_size(radius: f32) -> u32 {
    ((radius * 2.0).ceil() as u32).max(4).min(MAX_GLOBE_SIZE)
}

const HELP: &str = "A: asteroid  C: comet  Backspace: remove newest\n\
                    1/2: points  3/4: radius  5/6: thickness  7/8: galaxy spin\n\
                    Arrows: turn  Q/Z: zoom  [ ]: speed  O: orbits  F: focus  Space: pause  ~: reset";

const FRAMES_PER_SECOND: f64 = 60.0;
/// Never simulate more than this many seconds in one go
const MAX_FRAME_DELTA: f64 = 0.1;

const DEFAULT_DISTANCE: f64 = 12.0;
/// Looking at the galaxy, the camera sits this many galaxy radii back
const GALAXY_DISTANCE: f64 = 2.5;
const MIN_DISTANCE: f64 = 0.5;
const MAX_DISTANCE: f64 = 400.0;
const ZOOM_SPEED: f64 = 1.03; // multiply / divide the distance by this much per frame
const TURN_SPEED: f64 = 0.02; // radians per frame
const MAX_PITCH: f64 = 1.5;
const SPEED_SPEED: f64 = 1.05; // speed speed... how fast the simulation speed changes per frame
const MIN_SPEED: f64 = 0.01;
const MAX_SPEED: f64 = 100.0;

const SPRITE_SIZE: u32 = 32;
const STAR_SIZE: f32 = 2.0;
const GALAXY_POINT_SIZE: f32 = 3.0;

const TEXTURE_WIDTH: u32 = 256;
const TEXTURE_HEIGHT: u32 = 128;
const RING_TEXTURE_WIDTH: u32 = 8;
const RING_TEXTURE_HEIGHT: u32 = 128;
const RING_LINES: usize = 16;
const RING_SEGMENTS: usize = 64;
const MAX_GLOBE_SIZE: u32 = 128;

/// Everything gets at least this many pixels of radius so it doesn't vanish.
const MIN_RADIUS: f32 = 1.5;
/// The sun's glow is this many times its radius across
const GLOW: f32 = 5.0;
const ORBIT_ALPHA: f32 = 0.15;
const TAIL_ALPHA: f32 = 0.6;
/// Particle sizes are tiny in world units, so puff them up a little
const TAIL_PARTICLE_SCALE: f32 = 0.3;

#[cfg(test)]
mod tests {
    use super::*;

    use generator::field::Distribution;
    use simulator::orbit::Orbit;

    #[test]
    fn belts_hide_their_orbits_but_custom_rocks_dont() {
        let rock = Orbiter::new(Body::new("A-0001C", 0.1, 0x555555), Orbit::circular(18.0, 0.001))
            .tumbling();
        let planet = Orbiter::new(Body::new("Mars", 0.5, 0xB22E1C), Orbit::circular(15.0, 0.002));
        assert!(!shows_orbit(&rock, false));
        assert!(shows_orbit(&rock, true));
        assert!(shows_orbit(&planet, false));
    }

    #[test]
    fn fields_flatten_three_to_a_point() {
        let mut rand = SmallRng::seed_from_u64(3);
        let points = field::generate(50, &Distribution::Spherical { radius: 5.0 }, &mut rand);
        let flat = Field::new(&points);
        assert_eq!(flat.positions.len(), 150);
        assert_eq!(flat.colors.len(), 150);
        assert_eq!(flat.positions[3], points[1].pos.x as f32);
    }

    #[test]
    fn globes_stay_small() {
        assert_eq!(globe_size(0.1), 4);
        assert_eq!(globe_size(10.0), 20);
        assert_eq!(globe_size(5000.0), MAX_GLOBE_SIZE);
    }
}
