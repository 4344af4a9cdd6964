use std::f64::consts::FRAC_PI_2;

use clap::ValueEnum;

/// Integrands selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuiltinIntegrand {
    /// cos(x)
    Cos,
    /// sin(x)
    Sin,
    /// exp(x)
    Exp,
    /// x^3 - 2x + 1
    Cubic,
    /// exp(-x^2)
    Gaussian,
    /// sqrt(x)
    Sqrt,
}

impl BuiltinIntegrand {
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Self::Cos => x.cos(),
            Self::Sin => x.sin(),
            Self::Exp => x.exp(),
            Self::Cubic => x.powi(3) - 2. * x + 1.,
            Self::Gaussian => (-x * x).exp(),
            Self::Sqrt => x.sqrt(),
        }
    }

    fn antiderivative(self, x: f64) -> Option<f64> {
        match self {
            Self::Cos => Some(x.sin()),
            Self::Sin => Some(-x.cos()),
            Self::Exp => Some(x.exp()),
            Self::Cubic => Some(x.powi(4) / 4. - x * x + x),
            Self::Gaussian => None,
            Self::Sqrt => Some(2. / 3. * x.powf(1.5)),
        }
    }

    /// Exact value of the integral over `[a, b]` when an elementary
    /// antiderivative exists.
    pub fn exact(self, a: f64, b: f64) -> Option<f64> {
        Some(self.antiderivative(b)? - self.antiderivative(a)?)
    }

    pub fn default_support(self) -> (f64, f64) {
        match self {
            Self::Cos => (0., FRAC_PI_2),
            Self::Sin => (0., std::f64::consts::PI),
            Self::Gaussian => (-3., 3.),
            Self::Exp | Self::Cubic | Self::Sqrt => (0., 1.),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cos => "cos(x)",
            Self::Sin => "sin(x)",
            Self::Exp => "exp(x)",
            Self::Cubic => "x^3 - 2x + 1",
            Self::Gaussian => "exp(-x^2)",
            Self::Sqrt => "sqrt(x)",
        }
    }
}
