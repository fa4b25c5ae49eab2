//! Tests for the LAS parser service

mod parser_tests;

/// A small but representative LAS file used across tests
pub fn sample_las() -> &'static str {
    r#"~Version Information
 VERS.   2.0 : CWLS log ASCII Standard
~Well Information
#MNEM.UNIT       DATA             DESCRIPTION
 STRT.F  8665.00 : START DEPTH
 STOP.F  8667.00 : STOP DEPTH
 STEP.F  0.50 : STEP
 NULL.  -9999 : NULL VALUE
 WELL.  ANACONDA 55 : WELL NAME
 LOC.  Gulf Coast : LOCATION
~Curve Information
 DEPT.FT  : Depth
 GR.GAPI  : Gamma Ray
 RHOB.G/CC : Bulk Density
~Ascii
8665.00  45.2  2.35
8665.50  50.1  -9999
8666.00  48.7  2.41
"#
}
