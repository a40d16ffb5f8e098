// Reference values from a 50-digit mpmath evaluation of the BATS transform and the
// Student-t distribution (`betainc` for the CDF). Quantiles were bisected on the
// same high-precision CDF.

mod util;

#[cfg(feature = "probability_distributions")]
mod bats_reference_tests {
    use super::util::{assert_close, assert_slice_close, assert_slice_rel_close};
    use bats_kernels::kernels::scientific::distributions::univariate::bats::{
        Bats, bats_cdf, bats_ln_cdf, bats_ln_pdf, bats_pdf, bats_quantile,
    };
    use minarrow::vec64;

    fn symmetric() -> Bats {
        Bats::from_array([0.2, 1.0, 0.0, 0.2, 1.0, 0.0, 5.0]).unwrap()
    }

    fn skewed() -> Bats {
        Bats::from_array([-0.1, 0.7, -0.4, 0.35, 1.6, 0.8, 3.5]).unwrap()
    }

    fn closed_below() -> Bats {
        Bats::from_array([-0.5, 1.0, 0.0, 0.2, 1.0, 0.0, 5.0]).unwrap()
    }

    #[test]
    fn bats_pdf_symmetric() {
        let x = vec64![-3.0, -1.0, 0.0, 0.5, 1.0, 2.0, 5.0];
        let expect = vec64![
            0.00030373591869783126,
            0.1738187216088969,
            0.6380628888360487,
            0.45361284239558725,
            0.1738187216088969,
            0.008535198071319989,
            8.230861450414364e-07
        ];
        let got = bats_pdf(&x, &symmetric(), None, None);
        assert_slice_rel_close(&got, &expect, 1e-10);
    }

    #[test]
    fn bats_cdf_symmetric() {
        let x = vec64![-3.0, -1.0, 0.0, 0.5, 1.0, 2.0, 5.0];
        let expect = vec64![
            9.609244042756474e-05,
            0.06143291809086235,
            0.5,
            0.7859870746323795,
            0.9385670819091376,
            0.9974484538008923,
            0.9999996774377999
        ];
        let got = bats_cdf(&x, &symmetric(), None, None);
        assert_slice_close(&got, &expect, 1e-12);
    }

    #[test]
    fn bats_ln_cdf_symmetric_far_tail() {
        let x = vec64![-20.0, -200.0];
        let expect = vec64![-37.984092418888012, -90.589045388637268];
        let got = bats_ln_cdf(&x, &symmetric(), None, None);
        assert_slice_rel_close(&got, &expect, 1e-11);
    }

    #[test]
    fn bats_pdf_skewed() {
        let x = vec64![-5.0, -2.0, -0.5, 0.0, 0.8, 3.0, 12.0];
        let expect = vec64![
            1.3695969815615761e-15,
            0.0010705014752315733,
            0.52632923552958274,
            0.43364834634346537,
            0.20547797857187328,
            0.040010694148168411,
            5.3460569553491016e-6
        ];
        let got = bats_pdf(&x, &skewed(), None, None);
        assert_slice_rel_close(&got, &expect, 1e-9);
    }

    #[test]
    fn bats_ln_pdf_skewed() {
        let x = vec64![-5.0, -2.0, -0.5, 0.0, 0.8, 3.0, 12.0];
        let expect = vec64![
            -34.224259872390968,
            -6.8396280718583509,
            -0.64182833899251954,
            -0.83552133520273334,
            -1.5824164110221091,
            -3.2186085068966233,
            -12.139151286479177
        ];
        let got = bats_ln_pdf(&x, &skewed(), None, None);
        assert_slice_close(&got, &expect, 1e-10);
    }

    #[test]
    fn bats_cdf_skewed() {
        let x = vec64![-5.0, -2.0, -0.5, 0.0, 0.8, 3.0, 12.0];
        let expect = vec64![
            9.4006148388047571e-17,
            0.00016760594713957322,
            0.2350139888871972,
            0.48869869862522123,
            0.73012376836531328,
            0.96416065356120715,
            0.99999178427162737
        ];
        let got = bats_cdf(&x, &skewed(), None, None);
        assert_slice_rel_close(&got, &expect, 1e-9);
    }

    #[test]
    fn bats_ln_cdf_skewed() {
        let x = vec64![-5.0, -2.0, -0.5, 0.0, 0.8, 3.0, 12.0];
        let expect = vec64![
            -36.903171485378369,
            -8.6938948864195063,
            -1.4481102394300878,
            -0.71600913764139013,
            -0.31454121350504047,
            -0.036497345184880317,
            -8.2157621219115815e-6
        ];
        let got = bats_ln_cdf(&x, &skewed(), None, None);
        assert_slice_rel_close(&got, &expect, 1e-9);
    }

    #[test]
    fn bats_quantile_skewed() {
        let p = vec64![0.001, 0.05, 0.5, 0.95, 0.999];
        let expect = vec64![
            -1.7121525433265153,
            -0.97519719346289084,
            0.026379823259971417,
            2.6958672260164651,
            6.156641688831381
        ];
        let got = bats_quantile(&p, &skewed(), None, None).unwrap();
        assert_slice_close(&got, &expect, 1e-9);
    }

    #[test]
    fn bats_pdf_closed_below() {
        let x = vec64![-1.8, -1.5, -1.0, 0.0, 1.0, 4.0];
        let expect = vec64![
            8.9733184859374834e-14,
            1.674303874112388e-6,
            0.0050288645614644126,
            0.89698978251687111,
            0.19474450268376263,
            1.3563637791738492e-5
        ];
        let got = bats_pdf(&x, &closed_below(), None, None);
        assert_slice_rel_close(&got, &expect, 1e-9);
    }

    #[test]
    fn bats_cdf_closed_below() {
        let x = vec64![-1.8, -1.5, -1.0, 0.0, 1.0, 4.0];
        let expect = vec64![
            4.9137768073800117e-16,
            5.9568896654774555e-8,
            0.00042204929962086957,
            0.34314885612290823,
            0.93441153678096871,
            0.99999523014126489
        ];
        let got = bats_cdf(&x, &closed_below(), None, None);
        assert_slice_rel_close(&got, &expect, 1e-9);
    }

    #[test]
    fn bats_support_edge_closed_below() {
        // x_min = -ln(e² - 1)
        let d = closed_below();
        assert_close(d.bounds().lower, -1.854586542131141, 1e-14);
        let x = vec64![-2.0, -1.854586542131141, 10.0];
        let pdf = bats_pdf(&x, &d, None, None);
        let ln_cdf = bats_ln_cdf(&x, &d, None, None);
        assert_eq!(pdf.data[0], 0.0);
        assert_eq!(ln_cdf.data[0], f64::NEG_INFINITY);
        assert!(pdf.data[2] > 0.0);
    }
}
