use glam::{Mat3, Mat4, Quat, Vec3};

/// Projection attached to a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f32,
        /// Viewport aspect ratio (width / height).
        aspect: f32,
        /// Near clipping plane distance.
        znear: f32,
        /// Far clipping plane distance.
        zfar: f32,
    },
    /// Orthographic projection with a magnification factor.
    Orthographic {
        /// Left extent of the view volume at zoom 1.
        left: f32,
        /// Right extent of the view volume at zoom 1.
        right: f32,
        /// Top extent of the view volume at zoom 1.
        top: f32,
        /// Bottom extent of the view volume at zoom 1.
        bottom: f32,
        /// Near clipping plane distance.
        znear: f32,
        /// Far clipping plane distance.
        zfar: f32,
        /// Magnification; extents are divided by this.
        zoom: f32,
    },
    /// Host-supplied projection matrix the controllers cannot interpret.
    Custom(Mat4),
}

/// Coarse projection classification used by the controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// [`Projection::Perspective`].
    Perspective,
    /// [`Projection::Orthographic`].
    Orthographic,
    /// [`Projection::Custom`].
    Unsupported,
}

impl Projection {
    /// Classify this projection.
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Self::Perspective { .. } => ProjectionKind::Perspective,
            Self::Orthographic { .. } => ProjectionKind::Orthographic,
            Self::Custom(_) => ProjectionKind::Unsupported,
        }
    }

    /// Build the projection matrix ([0,1] depth range).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Self::Perspective {
                fovy,
                aspect,
                znear,
                zfar,
            } => Mat4::perspective_rh(fovy.to_radians(), aspect, znear, zfar),
            Self::Orthographic {
                left,
                right,
                top,
                bottom,
                znear,
                zfar,
                zoom,
            } => {
                let half_w = (right - left) / (2.0 * zoom);
                let half_h = (top - bottom) / (2.0 * zoom);
                let cx = (right + left) / 2.0;
                let cy = (top + bottom) / 2.0;
                Mat4::orthographic_rh(
                    cx - half_w,
                    cx + half_w,
                    cy - half_h,
                    cy + half_h,
                    znear,
                    zfar,
                )
            }
            Self::Custom(m) => m,
        }
    }
}

/// Camera handle read and written by the controllers.
///
/// The camera looks down its local −Z axis; `orientation` rotates local
/// axes into world space.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Local-to-world rotation.
    pub orientation: Quat,
    /// World "up" used as the orbit pole and look-at reference.
    pub up: Vec3,
    /// Projection parameters.
    pub projection: Projection,
}

impl Camera {
    /// Perspective camera at `position` looking at `target`.
    #[must_use]
    pub fn perspective(
        position: Vec3,
        target: Vec3,
        fovy: f32,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            projection: Projection::Perspective {
                fovy,
                aspect,
                znear,
                zfar,
            },
        };
        camera.look_at(target);
        camera
    }

    /// Orthographic camera at `position` looking at `target`, with the
    /// given half-extents at zoom 1.
    #[must_use]
    pub fn orthographic(
        position: Vec3,
        target: Vec3,
        half_width: f32,
        half_height: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            projection: Projection::Orthographic {
                left: -half_width,
                right: half_width,
                top: half_height,
                bottom: -half_height,
                znear,
                zfar,
                zoom: 1.0,
            },
        };
        camera.look_at(target);
        camera
    }

    /// Rotate so the local −Z axis points at `target`, keeping local +Y as
    /// close to [`Camera::up`] as possible.
    pub fn look_at(&mut self, target: Vec3) {
        let mut z = self.position - target;
        if z.length_squared() == 0.0 {
            z = Vec3::Z;
        }
        let mut z = z.normalize();
        let up = self.up.normalize_or(Vec3::Y);

        let mut x = up.cross(z);
        if x.length_squared() == 0.0 {
            // View axis parallel to up: nudge it so a basis exists.
            if (up.z.abs() - 1.0).abs() < f32::EPSILON {
                z.x += 1e-4;
            } else {
                z.z += 1e-4;
            }
            z = z.normalize();
            x = up.cross(z);
        }
        let x = x.normalize();
        let y = z.cross(x);

        self.orientation = Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize();
    }

    /// World-space view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// World-space local +X axis.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// World-space local +Y axis.
    #[must_use]
    pub fn local_up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Orthographic magnification, `None` for other projections.
    #[must_use]
    pub fn zoom(&self) -> Option<f32> {
        match self.projection {
            Projection::Orthographic { zoom, .. } => Some(zoom),
            _ => None,
        }
    }

    /// Update the aspect ratio after a viewport resize.
    ///
    /// Orthographic extents are rescaled horizontally so the vertical
    /// extent is preserved; custom projections are left to the host.
    pub fn set_aspect(&mut self, new_aspect: f32) {
        if !new_aspect.is_finite() || new_aspect <= 0.0 {
            return;
        }
        match &mut self.projection {
            Projection::Perspective { aspect, .. } => *aspect = new_aspect,
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                ..
            } => {
                let half_w = (*top - *bottom) * new_aspect / 2.0;
                let cx = (*left + *right) / 2.0;
                *left = cx - half_w;
                *right = cx + half_w;
            }
            Projection::Custom(_) => {}
        }
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            .inverse()
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection.matrix() * self.view_matrix()
    }
}

/// Viewport size in physical pixels.
///
/// Pointer deltas are scaled by these extents, so neither may be zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels (≥ 1).
    pub width: f32,
    /// Height in pixels (≥ 1).
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, clamping each extent to at least one pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    /// Width / height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio (0 for custom projections).
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees (0 unless perspective).
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.forward = camera.forward().to_array();
        (self.aspect, self.fovy) = match camera.projection {
            Projection::Perspective { fovy, aspect, .. } => (aspect, fovy),
            Projection::Orthographic {
                left,
                right,
                top,
                bottom,
                ..
            } => ((right - left) / (top - bottom), 0.0),
            Projection::Custom(_) => (0.0, 0.0),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::perspective(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
            45.0,
            1.0,
            0.1,
            100.0,
        )
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut camera = test_camera();
        camera.position = Vec3::new(3.0, 4.0, 5.0);
        camera.look_at(Vec3::new(1.0, 0.0, -2.0));
        let expected = (Vec3::new(1.0, 0.0, -2.0) - camera.position).normalize();
        assert!((camera.forward() - expected).length() < 1e-5);
        // Right axis stays horizontal for a Y-up camera.
        assert!(camera.right().y.abs() < 1e-5);
    }

    #[test]
    fn look_at_straight_down_still_builds_a_basis() {
        let mut camera = test_camera();
        camera.position = Vec3::new(0.0, 10.0, 0.0);
        camera.look_at(Vec3::ZERO);
        assert!(camera.orientation.is_finite());
        assert!(camera.forward().y < -0.99);
    }

    #[test]
    fn view_matrix_maps_target_onto_negative_z() {
        let camera = test_camera();
        let p = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
        assert!((p.z + 10.0).abs() < 1e-4);
    }

    #[test]
    fn projection_kinds() {
        assert_eq!(test_camera().projection.kind(), ProjectionKind::Perspective);
        let ortho =
            Camera::orthographic(Vec3::Z, Vec3::ZERO, 4.0, 3.0, 0.1, 10.0);
        assert_eq!(ortho.projection.kind(), ProjectionKind::Orthographic);
        assert_eq!(ortho.zoom(), Some(1.0));
        assert_eq!(
            Projection::Custom(Mat4::IDENTITY).kind(),
            ProjectionKind::Unsupported
        );
    }

    #[test]
    fn resize_keeps_orthographic_height() {
        let mut ortho =
            Camera::orthographic(Vec3::Z, Vec3::ZERO, 4.0, 3.0, 0.1, 10.0);
        ortho.set_aspect(2.0);
        let Projection::Orthographic {
            left,
            right,
            top,
            bottom,
            ..
        } = ortho.projection
        else {
            unreachable!()
        };
        assert_eq!(top - bottom, 6.0);
        assert_eq!(right - left, 12.0);
    }

    #[test]
    fn viewport_never_zero() {
        let v = Viewport::new(0, 0);
        assert_eq!(v.width, 1.0);
        assert_eq!(v.height, 1.0);
    }

    #[test]
    fn uniform_tracks_camera() {
        let camera = test_camera();
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        assert_eq!(uniform.position, [0.0, 0.0, 10.0]);
        assert_eq!(uniform.fovy, 45.0);
        assert!((uniform.forward[2] + 1.0).abs() < 1e-5);
    }
}
