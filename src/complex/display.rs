// Formatting and parsing of complex numbers in the `a + jb` notation

use std::fmt;
use std::str::FromStr;

use super::Complex;
use crate::error::{Error, Result};

/// The symbol written in front of the imaginary part
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImaginaryUnit {
    I,
    #[default]
    J,
}

impl ImaginaryUnit {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'i',
            Self::J => 'j',
        }
    }
}

/// Helper returned by [`Complex::display_with`]
#[derive(Clone, Copy, Debug)]
pub struct ComplexDisplay {
    value: Complex,
    unit: ImaginaryUnit,
}

impl fmt::Display for ComplexDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Complex { re, im } = self.value;
        let (sign, im) = if im.is_sign_negative() && !im.is_nan() {
            ('-', -im)
        } else {
            ('+', im)
        };
        let unit = self.unit.as_char();
        if let Some(p) = f.precision() {
            write!(f, "{re:.p$} {sign} {unit}{im:.p$}")
        } else {
            write!(f, "{re} {sign} {unit}{im}")
        }
    }
}

impl fmt::Display for Complex {
    /// Writes `re + jim` (or `re - jim`), honouring the precision flag.
    ///
    /// ```
    /// use complex_poly::Complex;
    ///
    /// assert_eq!(Complex::new(2.0, -3.5).to_string(), "2 - j3.5");
    /// assert_eq!(format!("{:.2}", Complex::new(1.0, 0.25)), "1.00 + j0.25");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(ImaginaryUnit::default()), f)
    }
}

impl Complex {
    /// Format using an explicit symbol for the imaginary unit
    ///
    /// ```
    /// use complex_poly::{Complex, ImaginaryUnit};
    ///
    /// let z = Complex::new(2.0, 3.0);
    /// assert_eq!(z.display_with(ImaginaryUnit::I).to_string(), "2 + i3");
    /// ```
    #[must_use]
    pub const fn display_with(self, unit: ImaginaryUnit) -> ComplexDisplay {
        ComplexDisplay { value: self, unit }
    }

    /// Parse a string of the form `<real><+|-><i|j><imag>`, such as `"2+j3"`
    /// or `"2 - i3"`. Whitespace anywhere in the string is ignored.
    ///
    /// # Errors
    /// - `Format` if the imaginary unit marker or the sign separating the two
    ///   parts is missing, or if either part is not a valid number
    pub fn parse(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = compact.as_bytes();

        // the separator is the first sign that is directly followed by the
        // unit marker and does not start the real part
        let separator = (1..bytes.len().saturating_sub(1)).find(|&k| {
            matches!(bytes[k], b'+' | b'-') && matches!(bytes[k + 1], b'i' | b'j')
        });

        let Some(k) = separator else {
            if !compact.contains(['i', 'j']) {
                return Err(Error::format(s, "missing imaginary unit marker `i` or `j`"));
            }
            return Err(Error::format(s, "missing `+` or `-` between real and imaginary parts"));
        };

        let re: f64 = compact[..k]
            .parse()
            .map_err(|_| Error::format(s, "invalid real part"))?;
        let im: f64 = compact[k + 2..]
            .parse()
            .map_err(|_| Error::format(s, "invalid imaginary part"))?;
        let im = if bytes[k] == b'-' { -im } else { im };
        Ok(Self::new(re, im))
    }
}

impl FromStr for Complex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::ImaginaryUnit;
    use crate::{Complex, Error};

    #[test]
    fn parse_basic() {
        assert_eq!("2+j3".parse::<Complex>().unwrap(), Complex::new(2.0, 3.0));
        assert_eq!(" 2 - i3 ".parse::<Complex>().unwrap(), Complex::new(2.0, -3.0));
        assert_eq!(
            "-1.5e2 + j0.5".parse::<Complex>().unwrap(),
            Complex::new(-150.0, 0.5)
        );
        assert_eq!("0-j-2".parse::<Complex>().unwrap(), Complex::new(0.0, 2.0));
    }

    #[test]
    fn parse_non_finite() {
        let z: Complex = "inf - jNaN".parse().unwrap();
        assert_eq!(z.re(), f64::INFINITY);
        assert!(z.im().is_nan());
    }

    #[test]
    fn parse_missing_marker() {
        let err = "2+3".parse::<Complex>().unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
        assert!(err.to_string().contains("\"2+3\""));
        assert!(err.to_string().contains("marker"));
    }

    #[test]
    fn parse_missing_sign() {
        let err = "2j3".parse::<Complex>().unwrap_err();
        assert!(err.to_string().contains("`+` or `-`"));
    }

    #[test]
    fn parse_bad_numbers() {
        let err = "x+j3".parse::<Complex>().unwrap_err();
        assert!(err.to_string().contains("real part"));
        let err = "1+j3y".parse::<Complex>().unwrap_err();
        assert!(err.to_string().contains("imaginary part"));
        assert!("+j3".parse::<Complex>().is_err());
    }

    #[test]
    fn display_round_trip() {
        for z in [
            Complex::new(1.0, 2.0),
            Complex::new(-0.125, -3E-7),
            Complex::new(6.02E23, 0.0),
            Complex::new(f64::NEG_INFINITY, f64::INFINITY),
        ] {
            assert_eq!(z.to_string().parse::<Complex>().unwrap(), z);
            let with_i = z.display_with(ImaginaryUnit::I).to_string();
            assert_eq!(with_i.parse::<Complex>().unwrap(), z);
        }
    }

    #[test]
    fn display_units() {
        let z = Complex::new(1.5, -2.0);
        assert_eq!(z.to_string(), "1.5 - j2");
        assert_eq!(z.display_with(ImaginaryUnit::I).to_string(), "1.5 - i2");
    }
}
