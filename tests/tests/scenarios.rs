//! Concrete end-to-end scenarios with fixed scalars

use smallecc_algorithms::ec::Point;
use smallecc_api::{Error as ApiError, ScriptedSource};
use smallecc_params::curves::{PAAR_P17, TOY_K7_P17};
use smallecc_pke::{decrypt, encrypt, generate_keypair, CipherPoint, Error, PublicKey};
use smallecc_tests::preset;

#[test]
fn toy_curve_scenario() {
    let (curve, g) = preset(&TOY_K7_P17);
    assert_eq!(g, Point::finite(8, 3));

    // d = 5, then k = 2
    let mut rng = ScriptedSource::new(vec![5, 2]);
    let pair = generate_keypair(&curve, &g, &mut rng).unwrap();
    assert_eq!(pair.private.scalar(), 5);
    assert_eq!(pair.public.point(), &Point::finite(8, 14));

    let message = curve.point(1, 12).unwrap();
    let cipher = encrypt(&curve, &g, &pair.public, &message, &mut rng).unwrap();
    assert_eq!(
        cipher,
        CipherPoint {
            c1: Point::finite(5, 8),
            c2: Point::finite(2, 10),
        }
    );
    assert_eq!(decrypt(&curve, &cipher, &pair.private), Ok(Point::finite(1, 12)));
}

#[test]
fn toy_curve_scenario_with_rejections() {
    let (curve, g) = preset(&TOY_K7_P17);
    // keygen rejects 6 and 12, encryption rejects 6
    let mut rng = ScriptedSource::new(vec![6, 12, 7, 6, 3]);
    let pair = generate_keypair(&curve, &g, &mut rng).unwrap();
    assert_eq!(pair.private.scalar(), 7);
    assert_eq!(pair.public.point(), &g);

    let message = Point::finite(1, 12);
    let cipher = encrypt(&curve, &g, &pair.public, &message, &mut rng).unwrap();
    assert_eq!(rng.draws(), 5);
    assert_eq!(cipher.c1, Point::finite(3, 0));
    assert_eq!(cipher.c2, Point::finite(15, 4));
    assert_eq!(decrypt(&curve, &cipher, &pair.private), Ok(message));
}

#[test]
fn paar_curve_scenario() {
    let (curve, g) = preset(&PAAR_P17);
    let mut rng = ScriptedSource::new(vec![7, 10]);
    let pair = generate_keypair(&curve, &g, &mut rng).unwrap();
    assert_eq!(pair.public.point(), &Point::finite(0, 6));

    let message = Point::finite(9, 16);
    let cipher = encrypt(&curve, &g, &pair.public, &message, &mut rng).unwrap();
    assert_eq!(cipher.c1, Point::finite(7, 11));
    assert_eq!(cipher.c2, Point::finite(5, 16));
    assert_eq!(decrypt(&curve, &cipher, &pair.private), Ok(message));
}

#[test]
fn tampered_ciphertext_is_rejected_or_decodes_differently() {
    let (curve, g) = preset(&PAAR_P17);
    let mut rng = ScriptedSource::new(vec![7, 10]);
    let pair = generate_keypair(&curve, &g, &mut rng).unwrap();
    let message = Point::finite(9, 16);
    let cipher = encrypt(&curve, &g, &pair.public, &message, &mut rng).unwrap();

    let off_curve = CipherPoint {
        c1: cipher.c1,
        c2: Point::finite(5, 15),
    };
    assert_eq!(
        decrypt(&curve, &off_curve, &pair.private),
        Err(Error::InvalidCiphertext("C2 is not on the curve"))
    );

    let shifted = CipherPoint {
        c1: cipher.c1,
        c2: curve.add(&cipher.c2, &g).unwrap(),
    };
    assert_ne!(decrypt(&curve, &shifted, &pair.private), Ok(message));
}

#[test]
fn api_errors_surface_through_scheme_errors() {
    let (curve, _) = preset(&TOY_K7_P17);
    let err = PublicKey::new(&curve, Point::finite(0, 0)).unwrap_err();
    assert_eq!(
        ApiError::from(err),
        ApiError::InvalidPoint {
            context: "public key"
        }
    );
}

#[test]
fn serde_roundtrip_of_plain_data() {
    let (curve, g) = preset(&PAAR_P17);
    let mut rng = ScriptedSource::new(vec![7, 10]);
    let pair = generate_keypair(&curve, &g, &mut rng).unwrap();
    let cipher = encrypt(&curve, &g, &pair.public, &Point::finite(9, 16), &mut rng).unwrap();

    let json = serde_json::to_string(&cipher).unwrap();
    assert_eq!(serde_json::from_str::<CipherPoint>(&json).unwrap(), cipher);

    let json = serde_json::to_string(&pair.public).unwrap();
    assert_eq!(serde_json::from_str::<PublicKey>(&json).unwrap(), pair.public);

    let json = serde_json::to_string(&Point::Infinity).unwrap();
    assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), Point::Infinity);

    let json = serde_json::to_string(&curve).unwrap();
    assert_eq!(serde_json::from_str::<smallecc_algorithms::Curve>(&json).unwrap(), curve);
}

#[test]
fn serde_rejects_invalid_curve_moduli() {
    for json in [
        r#"{"a":0,"b":7,"p":0}"#,
        r#"{"a":0,"b":7,"p":18}"#,
        r#"{"a":0,"b":7,"p":3}"#,
        r#"{"a":0,"b":7,"p":9223372036854775807}"#,
    ] {
        assert!(serde_json::from_str::<smallecc_algorithms::Curve>(json).is_err(), "{}", json);
    }

    // Coefficients are reduced exactly as Curve::new reduces them
    let curve = serde_json::from_str::<smallecc_algorithms::Curve>(r#"{"a":-17,"b":24,"p":17}"#).unwrap();
    assert_eq!((curve.a(), curve.b(), curve.p()), (0, 7, 17));
}
