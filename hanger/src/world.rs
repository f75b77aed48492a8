//! Rope chain simulated with `rapier2d`.
//!
//! The world owns every physics resource explicitly: body, collider and
//! joint sets, the broad/narrow phases, and the pipeline. Nothing is global;
//! dropping or [`RopeWorld::clear`]ing the world releases all of it.
//!
//! Chain layout is fixed at construction:
//!
//! ```text
//! anchor ──link₀── bead₀ ──link₁── bead₁ … beadₙ₋₁ ──linkₙ── handle
//! ```
//!
//! Links are acceleration-based spring joints with a rest length and a
//! stiffness below the full spring rate, so the cord stretches slightly.
//! Rope bodies carry colliders for mass and restitution but interact with
//! nothing so beads never snag on each other.
//!
//! Coordinates are CSS pixels with y pointing down.

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;

use rapier2d::prelude::*;

use crate::config::HangerConfig;
use crate::consts::{BODY_LINEAR_DAMPING, LINK_DAMPING, LINK_SPRING_RATE, REFERENCE_FPS, REFERENCE_FRAME_MS};
use crate::viewport::Point;

/// Identifies a body in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RopeBody {
    /// The fixed ceiling anchor.
    Anchor,
    /// Intermediate bead, indexed from the anchor end.
    Segment(usize),
    /// The pull handle at the free end.
    Handle,
}

/// Read-only view of one body for hit-testing and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub body: RopeBody,
    pub position: Point,
    pub radius: f64,
}

/// Physics world holding a single rope chain.
pub struct RopeWorld {
    config: HangerConfig,
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    anchor: Option<RigidBodyHandle>,
    segments: Vec<RigidBodyHandle>,
    handle: Option<RigidBodyHandle>,
    links: Vec<ImpulseJointHandle>,
}

#[allow(clippy::cast_possible_truncation)]
fn real(v: f64) -> Real {
    v as Real
}

fn point_of(body: &RigidBody) -> Point {
    let t = body.translation();
    Point::new(f64::from(t.x), f64::from(t.y))
}

impl RopeWorld {
    /// Build the chain with its anchor at `anchor_x`.
    #[must_use]
    pub fn new(config: HangerConfig, anchor_x: f64) -> Self {
        let gravity = vector![0.0, real(config.gravity)];
        let mut world = Self {
            config,
            gravity,
            params: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            anchor: None,
            segments: Vec::new(),
            handle: None,
            links: Vec::new(),
        };
        world.build(anchor_x);
        world
    }

    fn build(&mut self, anchor_x: f64) {
        let cfg = &self.config;
        let x = real(anchor_x);

        let anchor = self
            .bodies
            .insert(RigidBodyBuilder::fixed().translation(vector![x, real(cfg.anchor_y)]).build());

        let mut segments = Vec::with_capacity(cfg.segment_count);
        for i in 0..cfg.segment_count {
            #[allow(clippy::cast_precision_loss)]
            let y = cfg.first_segment_y + i as f64 * cfg.segment_length;
            let bead = self.bodies.insert(
                RigidBodyBuilder::dynamic()
                    .translation(vector![x, real(y)])
                    .linear_damping(real(BODY_LINEAR_DAMPING))
                    .build(),
            );
            let collider = ColliderBuilder::ball(real(cfg.segment_radius))
                .collision_groups(InteractionGroups::none())
                .build();
            self.colliders.insert_with_parent(collider, bead, &mut self.bodies);
            segments.push(bead);
        }

        let handle = self.bodies.insert(
            RigidBodyBuilder::dynamic()
                .translation(vector![x, real(cfg.handle_rest_y())])
                .linear_damping(real(BODY_LINEAR_DAMPING))
                .build(),
        );
        let collider = ColliderBuilder::ball(real(cfg.handle_radius))
            .restitution(real(cfg.handle_restitution))
            .collision_groups(InteractionGroups::none())
            .build();
        self.colliders.insert_with_parent(collider, handle, &mut self.bodies);

        let stiffness = real(cfg.link_stiffness * LINK_SPRING_RATE);
        let mut chain = Vec::with_capacity(segments.len() + 2);
        chain.push((anchor, 0.0));
        for (i, bead) in segments.iter().enumerate() {
            chain.push((*bead, if i == 0 { 0.0 } else { cfg.segment_length }));
        }
        chain.push((handle, cfg.handle_link_length));

        let mut links = Vec::with_capacity(chain.len() - 1);
        for pair in chain.windows(2) {
            let (from, _) = pair[0];
            let (to, rest) = pair[1];
            let joint = SpringJointBuilder::new(real(rest), stiffness, real(LINK_DAMPING))
                .spring_model(MotorModel::AccelerationBased)
                .contacts_enabled(false)
                .build();
            links.push(self.impulse_joints.insert(from, to, joint, true));
        }

        self.anchor = Some(anchor);
        self.segments = segments;
        self.handle = Some(handle);
        self.links = links;
        log::debug!(
            "rope built: {} beads, {} links, anchor x={anchor_x:.1}",
            self.segments.len(),
            self.links.len()
        );
    }

    /// Remove every body and link. Safe to call repeatedly.
    pub fn clear(&mut self) {
        let handles: Vec<RigidBodyHandle> = self
            .anchor
            .take()
            .into_iter()
            .chain(self.segments.drain(..))
            .chain(self.handle.take())
            .collect();
        for h in handles {
            self.bodies.remove(
                h,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            );
        }
        self.links.clear();
    }

    /// Tear the chain down and build a fresh one at `anchor_x`.
    pub fn rebuild(&mut self, anchor_x: f64) {
        self.clear();
        self.build(anchor_x);
    }

    /// Advance the integrator by `dt_ms` milliseconds.
    pub fn step(&mut self, dt_ms: f64) {
        if self.is_empty() {
            return;
        }
        self.params.dt = real(dt_ms / 1000.0);
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &(),
        );
    }

    /// Steer a dragged body toward `target` for the coming step.
    ///
    /// The body's velocity is blended toward the velocity that would close
    /// the gap within one reference frame. `stiffness` is the blend per
    /// reference frame, rescaled for the actual step length.
    pub fn drag_toward(&mut self, body: RopeBody, target: Point, stiffness: f64, dt_ms: f64) {
        let Some(h) = self.handle_of(body) else {
            return;
        };
        let Some(rb) = self.bodies.get_mut(h) else {
            return;
        };
        if !rb.is_dynamic() {
            return;
        }
        let pos = point_of(rb);
        let desired_x = (target.x - pos.x) * REFERENCE_FPS;
        let desired_y = (target.y - pos.y) * REFERENCE_FPS;
        let k = stiffness.clamp(0.0, 1.0);
        let blend = 1.0 - (1.0 - k).powf(dt_ms / REFERENCE_FRAME_MS);
        let v = rb.linvel();
        let (vx, vy) = (f64::from(v.x), f64::from(v.y));
        let next = vector![real(vx + (desired_x - vx) * blend), real(vy + (desired_y - vy) * blend)];
        rb.set_linvel(next, true);
    }

    /// Current speed of a body in pixels per reference frame.
    #[must_use]
    pub fn speed(&self, body: RopeBody) -> f64 {
        self.handle_of(body)
            .and_then(|h| self.bodies.get(h))
            .map_or(0.0, |rb| {
                let v = rb.linvel();
                f64::from(v.x).hypot(f64::from(v.y)) / REFERENCE_FPS
            })
    }

    /// Current centre of a body.
    #[must_use]
    pub fn position(&self, body: RopeBody) -> Option<Point> {
        self.handle_of(body).and_then(|h| self.bodies.get(h)).map(point_of)
    }

    /// Points of the rope line: anchor, each bead, then the handle.
    #[must_use]
    pub fn polyline(&self) -> Vec<Point> {
        self.chain_order()
            .into_iter()
            .filter_map(|body| self.position(body))
            .collect()
    }

    /// Beads and handle with their radii, in chain order. The anchor is invisible.
    #[must_use]
    pub fn visible_bodies(&self) -> Vec<BodyView> {
        self.chain_order()
            .into_iter()
            .filter(|body| *body != RopeBody::Anchor)
            .filter_map(|body| {
                let position = self.position(body)?;
                Some(BodyView { body, position, radius: self.radius(body) })
            })
            .collect()
    }

    /// Chain order of the bodies currently in the world.
    #[must_use]
    pub fn chain_order(&self) -> Vec<RopeBody> {
        let mut order = Vec::with_capacity(self.segments.len() + 2);
        if self.anchor.is_some() {
            order.push(RopeBody::Anchor);
        }
        order.extend((0..self.segments.len()).map(RopeBody::Segment));
        if self.handle.is_some() {
            order.push(RopeBody::Handle);
        }
        order
    }

    /// Radius used for picking and drawing.
    #[must_use]
    pub fn radius(&self, body: RopeBody) -> f64 {
        match body {
            RopeBody::Anchor => 0.0,
            RopeBody::Segment(_) => self.config.segment_radius,
            RopeBody::Handle => self.config.handle_radius,
        }
    }

    /// Label reported for a body in interaction events.
    #[must_use]
    pub fn label(&self, body: RopeBody) -> Option<&str> {
        match body {
            RopeBody::Handle if self.handle.is_some() => Some(self.config.handle_label.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &HangerConfig {
        &self.config
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of live spring links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.impulse_joints.len()
    }

    /// Number of live bodies, anchor included.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    fn handle_of(&self, body: RopeBody) -> Option<RigidBodyHandle> {
        match body {
            RopeBody::Anchor => self.anchor,
            RopeBody::Segment(i) => self.segments.get(i).copied(),
            RopeBody::Handle => self.handle,
        }
    }
}
