//! Tabulated symmetric quadrature rules on the reference triangle and tetrahedron
//!
//! The weights include the volume of the reference cell: the weights of each triangle rule sum
//! to 1/2 and the weights of each tetrahedron rule sum to 1/6.
#![allow(clippy::excessive_precision)]

/// A tabulated quadrature rule
pub(crate) struct TabulatedRule<const D: usize> {
    /// The highest degree of polynomial that the rule integrates exactly
    pub order: usize,
    pub points: &'static [[f64; D]],
    pub weights: &'static [f64],
}

/// The highest order of a tabulated triangle rule
pub(crate) const TRIANGLE_HIGHEST_ORDER: usize = 12;

/// The highest order of a tabulated tetrahedron rule
pub(crate) const TETRAHEDRON_HIGHEST_ORDER: usize = 5;

/// The number of points of the tabulated triangle rule used for a given order
pub(crate) fn triangle_npoints(order: usize) -> usize {
    match order {
        0 | 1 => 1,
        2 => 3,
        3 => 4,
        4 => 6,
        5 => 7,
        6 | 7 => 12,
        8 => 16,
        9 => 19,
        10 => 25,
        11 => 28,
        12 => 33,
        _ => 33,
    }
}

/// The number of points of the tabulated tetrahedron rule used for a given order
pub(crate) fn tetrahedron_npoints(order: usize) -> usize {
    match order {
        0 | 1 => 1,
        2 => 4,
        3 => 8,
        4 | 5 => 15,
        _ => 15,
    }
}

/// The tabulated triangle rule with `npoints` points
pub(crate) fn triangle_rule(npoints: usize) -> Option<&'static TabulatedRule<2>> {
    TRIANGLE_RULES.iter().find(|r| r.points.len() == npoints)
}

/// The tabulated tetrahedron rule with `npoints` points
pub(crate) fn tetrahedron_rule(npoints: usize) -> Option<&'static TabulatedRule<3>> {
    TETRAHEDRON_RULES.iter().find(|r| r.points.len() == npoints)
}

pub(crate) static TRIANGLE_RULES: [TabulatedRule<2>; 11] = [
    TabulatedRule {
        order: 1,
        points: &[
            [0.333333333333333333333333333333333, 0.333333333333333333333333333333333],
        ],
        weights: &[
            0.5,
        ],
    },
    TabulatedRule {
        order: 2,
        points: &[
            [4.0 / 6.0, 1.0 / 6.0],
            [1.0 / 6.0, 4.0 / 6.0],
            [1.0 / 6.0, 1.0 / 6.0],
        ],
        weights: &[
            0.5 / 3.0,
            0.5 / 3.0,
            0.5 / 3.0,
        ],
    },
    TabulatedRule {
        order: 3,
        points: &[
            [10.0 / 30.0, 10.0 / 30.0],
            [18.0 / 30.0, 6.0 / 30.0],
            [6.0 / 30.0, 18.0 / 30.0],
            [6.0 / 30.0, 6.0 / 30.0],
        ],
        weights: &[
            0.5 * -27.0 / 48.0,
            0.5 * 25.0 / 48.0,
            0.5 * 25.0 / 48.0,
            0.5 * 25.0 / 48.0,
        ],
    },
    TabulatedRule {
        order: 4,
        points: &[
            [0.81684757298045851308085707319560, 0.091576213509770743459571463402202],
            [0.091576213509770743459571463402202, 0.81684757298045851308085707319560],
            [0.091576213509770743459571463402202, 0.091576213509770743459571463402202],
            [0.10810301816807022736334149223390, 0.44594849091596488631832925388305],
            [0.44594849091596488631832925388305, 0.10810301816807022736334149223390],
            [0.44594849091596488631832925388305, 0.44594849091596488631832925388305],
        ],
        weights: &[
            0.5 * 0.10995174365532186763832632490021,
            0.5 * 0.10995174365532186763832632490021,
            0.5 * 0.10995174365532186763832632490021,
            0.5 * 0.22338158967801146569500700843312,
            0.5 * 0.22338158967801146569500700843312,
            0.5 * 0.22338158967801146569500700843312,
        ],
    },
    TabulatedRule {
        order: 5,
        points: &[
            [0.333333333333333333333333333333333, 0.333333333333333333333333333333333],
            [0.79742698535308732239802527616975, 0.1012865073234563388009873619151],
            [0.10128650732345633880098736191512, 0.79742698535308732239802527616975],
            [0.10128650732345633880098736191512, 0.10128650732345633880098736191512],
            [0.05971587178976982045911758097311, 0.47014206410511508977044120951345],
            [0.47014206410511508977044120951345, 0.05971587178976982045911758097311],
            [0.47014206410511508977044120951345, 0.47014206410511508977044120951345],
        ],
        weights: &[
            0.5 * 0.225,
            0.5 * 0.12593918054482715259568394550018,
            0.5 * 0.12593918054482715259568394550018,
            0.5 * 0.12593918054482715259568394550018,
            0.5 * 0.13239415278850618073764938783315,
            0.5 * 0.13239415278850618073764938783315,
            0.5 * 0.13239415278850618073764938783315,
        ],
    },
    TabulatedRule {
        order: 7,
        points: &[
            [0.0623822650944021181736830009963499, 0.0675178670739160854425571310508685],
            [0.0675178670739160854425571310508685, 0.870099867831681796383759867952782],
            [0.870099867831681796383759867952782, 0.0623822650944021181736830009963499],
            [0.0552254566569266117374791902756449, 0.321502493851981822666307849199202],
            [0.321502493851981822666307849199202, 0.623272049491091565596212960525153],
            [0.623272049491091565596212960525153, 0.0552254566569266117374791902756449],
            [0.0343243029450971464696306424839376, 0.660949196186735657611980310197799],
            [0.660949196186735657611980310197799, 0.304726500868167195918389047318263],
            [0.304726500868167195918389047318263, 0.0343243029450971464696306424839376],
            [0.515842334353591779257463386826430, 0.277716166976391782569581871393723],
            [0.277716166976391782569581871393723, 0.20644149867001643817295474177985],
            [0.20644149867001643817295474177985, 0.515842334353591779257463386826430],
        ],
        weights: &[
            0.5 * 0.053034056314872502857508360921478,
            0.5 * 0.053034056314872502857508360921478,
            0.5 * 0.053034056314872502857508360921478,
            0.5 * 0.087762817428892110073539806278575,
            0.5 * 0.087762817428892110073539806278575,
            0.5 * 0.087762817428892110073539806278575,
            0.5 * 0.057550085569963171476890993800437,
            0.5 * 0.057550085569963171476890993800437,
            0.5 * 0.057550085569963171476890993800437,
            0.5 * 0.13498637401960554892539417233284,
            0.5 * 0.13498637401960554892539417233284,
            0.5 * 0.13498637401960554892539417233284,
        ],
    },
    TabulatedRule {
        order: 8,
        points: &[
            [0.33333333333333333333333333333333, 0.33333333333333333333333333333333],
            [0.17056930775176020662229350149146, 0.17056930775176020662229350149146],
            [0.17056930775176020662229350149146, 0.65886138449647958675541299701707],
            [0.65886138449647958675541299701707, 0.17056930775176020662229350149146],
            [0.050547228317030975458423550596599, 0.050547228317030975458423550596599],
            [0.050547228317030975458423550596599, 0.89890554336593804908315289880680],
            [0.89890554336593804908315289880680, 0.050547228317030975458423550596599],
            [0.45929258829272315602881551449417, 0.45929258829272315602881551449417],
            [0.45929258829272315602881551449417, 0.08141482341455368794236897101166],
            [0.08141482341455368794236897101166, 0.45929258829272315602881551449417],
            [0.72849239295540428124100037917606, 0.26311282963463811342178578628464],
            [0.72849239295540428124100037917606, 0.00839477740995760533721383453930],
            [0.26311282963463811342178578628464, 0.72849239295540428124100037917606],
            [0.26311282963463811342178578628464, 0.00839477740995760533721383453930],
            [0.00839477740995760533721383453930, 0.72849239295540428124100037917606],
            [0.00839477740995760533721383453930, 0.26311282963463811342178578628464],
        ],
        weights: &[
            0.5 * 0.14431560767778716825109111048906,
            0.5 * 0.10321737053471825028179155029213,
            0.5 * 0.10321737053471825028179155029213,
            0.5 * 0.10321737053471825028179155029213,
            0.5 * 0.032458497623198080310925928341780,
            0.5 * 0.032458497623198080310925928341780,
            0.5 * 0.032458497623198080310925928341780,
            0.5 * 0.095091634267284624793896104388584,
            0.5 * 0.095091634267284624793896104388584,
            0.5 * 0.095091634267284624793896104388584,
            0.5 * 0.027230314174434994264844690073909,
            0.5 * 0.027230314174434994264844690073909,
            0.5 * 0.027230314174434994264844690073909,
            0.5 * 0.027230314174434994264844690073909,
            0.5 * 0.027230314174434994264844690073909,
            0.5 * 0.027230314174434994264844690073909,
        ],
    },
    TabulatedRule {
        order: 9,
        points: &[
            [0.333333333333333333333333333333333, 0.333333333333333333333333333333333],
            [0.48968251919873762778370692483619, 0.48968251919873762778370692483619],
            [0.48968251919873762778370692483619, 0.02063496160252474443258615032762],
            [0.02063496160252474443258615032762, 0.48968251919873762778370692483619],
            [0.43708959149293663726993036443535, 0.43708959149293663726993036443535],
            [0.43708959149293663726993036443535, 0.12582081701412672546013927112929],
            [0.12582081701412672546013927112929, 0.43708959149293663726993036443535],
            [0.18820353561903273024096128046733, 0.18820353561903273024096128046733],
            [0.18820353561903273024096128046733, 0.62359292876193453951807743906533],
            [0.62359292876193453951807743906533, 0.18820353561903273024096128046733],
            [0.044729513394452709865106589966276, 0.044729513394452709865106589966276],
            [0.044729513394452709865106589966276, 0.91054097321109458026978682006745],
            [0.91054097321109458026978682006745, 0.044729513394452709865106589966276],
            [0.74119859878449802069007987352342, 0.036838412054736283634817598783385],
            [0.74119859878449802069007987352342, 0.22196298916076569567510252769319],
            [0.036838412054736283634817598783385, 0.74119859878449802069007987352342],
            [0.036838412054736283634817598783385, 0.22196298916076569567510252769319],
            [0.22196298916076569567510252769319, 0.74119859878449802069007987352342],
            [0.22196298916076569567510252769319, 0.036838412054736283634817598783385],
        ],
        weights: &[
            0.5 * 0.097135796282798833819241982507289,
            0.5 * 0.031334700227139070536854831287209,
            0.5 * 0.031334700227139070536854831287209,
            0.5 * 0.031334700227139070536854831287209,
            0.5 * 0.077827541004774279316739356299404,
            0.5 * 0.077827541004774279316739356299404,
            0.5 * 0.077827541004774279316739356299404,
            0.5 * 0.079647738927210253032891774264045,
            0.5 * 0.079647738927210253032891774264045,
            0.5 * 0.079647738927210253032891774264045,
            0.5 * 0.025577675658698031261678798559000,
            0.5 * 0.025577675658698031261678798559000,
            0.5 * 0.025577675658698031261678798559000,
            0.5 * 0.043283539377289377289377289377289,
            0.5 * 0.043283539377289377289377289377289,
            0.5 * 0.043283539377289377289377289377289,
            0.5 * 0.043283539377289377289377289377289,
            0.5 * 0.043283539377289377289377289377289,
            0.5 * 0.043283539377289377289377289377289,
        ],
    },
    TabulatedRule {
        order: 10,
        points: &[
            [0.333333333333333333333333333333333, 0.333333333333333333333333333333333],
            [0.42508621060209057296952951163804, 0.42508621060209057296952951163804],
            [0.42508621060209057296952951163804, 0.14982757879581885406094097672391],
            [0.14982757879581885406094097672391, 0.42508621060209057296952951163804],
            [0.023308867510000190714466386895980, 0.023308867510000190714466386895980],
            [0.023308867510000190714466386895980, 0.95338226497999961857106722620804],
            [0.95338226497999961857106722620804, 0.023308867510000190714466386895980],
            [0.62830740021349255642083766607883, 0.22376697357697300622568649026820],
            [0.62830740021349255642083766607883, 0.14792562620953443735347584365296],
            [0.22376697357697300622568649026820, 0.62830740021349255642083766607883],
            [0.22376697357697300622568649026820, 0.14792562620953443735347584365296],
            [0.14792562620953443735347584365296, 0.62830740021349255642083766607883],
            [0.14792562620953443735347584365296, 0.22376697357697300622568649026820],
            [0.61131382618139764891875500225390, 0.35874014186443146457815530072385],
            [0.61131382618139764891875500225390, 0.02994603195417088650308969702225],
            [0.35874014186443146457815530072385, 0.61131382618139764891875500225390],
            [0.35874014186443146457815530072385, 0.02994603195417088650308969702225],
            [0.02994603195417088650308969702225, 0.61131382618139764891875500225390],
            [0.02994603195417088650308969702225, 0.35874014186443146457815530072385],
            [0.82107206998562937337354441347218, 0.14329537042686714530585663061732],
            [0.82107206998562937337354441347218, 0.03563255958750348132059895591050],
            [0.14329537042686714530585663061732, 0.82107206998562937337354441347218],
            [0.14329537042686714530585663061732, 0.03563255958750348132059895591050],
            [0.03563255958750348132059895591050, 0.82107206998562937337354441347218],
            [0.03563255958750348132059895591050, 0.14329537042686714530585663061732],
        ],
        weights: &[
            0.5 * 0.079894504741239707831247045213386,
            0.5 * 0.071123802232377334639291287398658,
            0.5 * 0.071123802232377334639291287398658,
            0.5 * 0.071123802232377334639291287398658,
            0.5 * 0.0082238186904641955186466203624719,
            0.5 * 0.0082238186904641955186466203624719,
            0.5 * 0.0082238186904641955186466203624719,
            0.5 * 0.045430592296170018007073629243933,
            0.5 * 0.045430592296170018007073629243933,
            0.5 * 0.045430592296170018007073629243933,
            0.5 * 0.045430592296170018007073629243933,
            0.5 * 0.045430592296170018007073629243933,
            0.5 * 0.045430592296170018007073629243933,
            0.5 * 0.037359856234305276826236499001975,
            0.5 * 0.037359856234305276826236499001975,
            0.5 * 0.037359856234305276826236499001975,
            0.5 * 0.037359856234305276826236499001975,
            0.5 * 0.037359856234305276826236499001975,
            0.5 * 0.037359856234305276826236499001975,
            0.5 * 0.030886656884563988782513077004629,
            0.5 * 0.030886656884563988782513077004629,
            0.5 * 0.030886656884563988782513077004629,
            0.5 * 0.030886656884563988782513077004629,
            0.5 * 0.030886656884563988782513077004629,
            0.5 * 0.030886656884563988782513077004629,
        ],
    },
    TabulatedRule {
        order: 11,
        points: &[
            [0.858870281282636704039173938058347, 0.141129718717363295960826061941652],
            [0.858870281282636704039173938058347, 0.0],
            [0.141129718717363295960826061941652, 0.858870281282636704039173938058347],
            [0.141129718717363295960826061941652, 0.0],
            [0.0, 0.858870281282636704039173938058347],
            [0.0, 0.141129718717363295960826061941652],
            [0.333333333333333333333333333333333, 0.333333333333333333333333333333333],
            [0.025989140928287395260032485498841, 0.025989140928287395260032485498841],
            [0.025989140928287395260032485498841, 0.94802171814342520947993502900232],
            [0.94802171814342520947993502900232, 0.025989140928287395260032485498841],
            [0.094287502647922495630569776275405, 0.094287502647922495630569776275405],
            [0.094287502647922495630569776275405, 0.81142499470415500873886044744919],
            [0.81142499470415500873886044744919, 0.094287502647922495630569776275405],
            [0.49463677501721381374163260230644, 0.49463677501721381374163260230644],
            [0.49463677501721381374163260230644, 0.01072644996557237251673479538713],
            [0.01072644996557237251673479538713, 0.49463677501721381374163260230644],
            [0.20734338261451133345293402411297, 0.20734338261451133345293402411297],
            [0.20734338261451133345293402411297, 0.58531323477097733309413195177407],
            [0.58531323477097733309413195177407, 0.20734338261451133345293402411297],
            [0.43890780570049209506106538163613, 0.43890780570049209506106538163613],
            [0.43890780570049209506106538163613, 0.12218438859901580987786923672775],
            [0.12218438859901580987786923672775, 0.43890780570049209506106538163613],
            [0.67793765488259040154212614118875, 0.044841677589130443309052391468801],
            [0.67793765488259040154212614118875, 0.27722066752827915514882146734245],
            [0.044841677589130443309052391468801, 0.67793765488259040154212614118875],
            [0.044841677589130443309052391468801, 0.27722066752827915514882146734245],
            [0.27722066752827915514882146734245, 0.67793765488259040154212614118875],
            [0.27722066752827915514882146734245, 0.044841677589130443309052391468801],
        ],
        weights: &[
            0.5 * 0.0073623837833005542642588950473806,
            0.5 * 0.0073623837833005542642588950473806,
            0.5 * 0.0073623837833005542642588950473806,
            0.5 * 0.0073623837833005542642588950473806,
            0.5 * 0.0073623837833005542642588950473806,
            0.5 * 0.0073623837833005542642588950473806,
            0.5 * 0.087977301162232238798093169321456,
            0.5 * 0.0087443115537360230495164287998252,
            0.5 * 0.0087443115537360230495164287998252,
            0.5 * 0.0087443115537360230495164287998252,
            0.5 * 0.038081571993934937515024339435614,
            0.5 * 0.038081571993934937515024339435614,
            0.5 * 0.038081571993934937515024339435614,
            0.5 * 0.018855448056131292058476782591115,
            0.5 * 0.018855448056131292058476782591115,
            0.5 * 0.018855448056131292058476782591115,
            0.5 * 0.072159697544739526124029988586463,
            0.5 * 0.072159697544739526124029988586463,
            0.5 * 0.072159697544739526124029988586463,
            0.5 * 0.069329138705535899841765650903814,
            0.5 * 0.069329138705535899841765650903814,
            0.5 * 0.069329138705535899841765650903814,
            0.5 * 0.041056315429288566641652314907294,
            0.5 * 0.041056315429288566641652314907294,
            0.5 * 0.041056315429288566641652314907294,
            0.5 * 0.041056315429288566641652314907294,
            0.5 * 0.041056315429288566641652314907294,
            0.5 * 0.041056315429288566641652314907294,
        ],
    },
    TabulatedRule {
        order: 12,
        points: &[
            [0.02356522045239, 0.488217389773805],
            [0.488217389773805, 0.02356522045239],
            [0.488217389773805, 0.488217389773805],
            [0.43972439229446, 0.43972439229446],
            [0.43972439229446, 0.120551215411079],
            [0.120551215411079, 0.43972439229446],
            [0.271210385012116, 0.271210385012116],
            [0.271210385012116, 0.457579229975768],
            [0.457579229975768, 0.271210385012116],
            [0.127576145541586, 0.127576145541586],
            [0.127576145541586, 0.7448477089168279],
            [0.7448477089168279, 0.127576145541586],
            [0.02131735045321, 0.02131735045321],
            [0.02131735045321, 0.9573652990935799],
            [0.9573652990935799, 0.02131735045321],
            [0.115343494534698, 0.275713269685514],
            [0.115343494534698, 0.6089432357797879],
            [0.275713269685514, 0.115343494534698],
            [0.275713269685514, 0.6089432357797879],
            [0.6089432357797879, 0.115343494534698],
            [0.6089432357797879, 0.275713269685514],
            [0.022838332222257, 0.28132558098994],
            [0.022838332222257, 0.6958360867878031],
            [0.28132558098994, 0.022838332222257],
            [0.28132558098994, 0.6958360867878031],
            [0.6958360867878031, 0.022838332222257],
            [0.6958360867878031, 0.28132558098994],
            [0.02573405054833, 0.116251915907597],
            [0.02573405054833, 0.858014033544073],
            [0.116251915907597, 0.02573405054833],
            [0.116251915907597, 0.858014033544073],
            [0.858014033544073, 0.02573405054833],
            [0.858014033544073, 0.116251915907597],
        ],
        weights: &[
            0.5 * 0.025731066440455,
            0.5 * 0.025731066440455,
            0.5 * 0.025731066440455,
            0.5 * 0.043692544538038,
            0.5 * 0.043692544538038,
            0.5 * 0.043692544538038,
            0.5 * 0.062858224217885,
            0.5 * 0.062858224217885,
            0.5 * 0.062858224217885,
            0.5 * 0.034796112930709,
            0.5 * 0.034796112930709,
            0.5 * 0.034796112930709,
            0.5 * 0.006166261051559,
            0.5 * 0.006166261051559,
            0.5 * 0.006166261051559,
            0.5 * 0.040371557766381,
            0.5 * 0.040371557766381,
            0.5 * 0.040371557766381,
            0.5 * 0.040371557766381,
            0.5 * 0.040371557766381,
            0.5 * 0.040371557766381,
            0.5 * 0.022356773202303,
            0.5 * 0.022356773202303,
            0.5 * 0.022356773202303,
            0.5 * 0.022356773202303,
            0.5 * 0.022356773202303,
            0.5 * 0.022356773202303,
            0.5 * 0.017316231108659,
            0.5 * 0.017316231108659,
            0.5 * 0.017316231108659,
            0.5 * 0.017316231108659,
            0.5 * 0.017316231108659,
            0.5 * 0.017316231108659,
        ],
    },
];

const M4_A: f64 = 0.585410196624968500;
const M4_B: f64 = 0.138196601125010500;

// (7 - sqrt(15)) / 34 and (7 + sqrt(15)) / 34
const S_1: f64 = 0.09197107805272303279;
const S_2: f64 = 0.31979362782962990839;
// (13 + 3 sqrt(15)) / 34 and (13 - 3 sqrt(15)) / 34
const T_1: f64 = 0.72408676584183090164;
const T_2: f64 = 0.04061911651111027484;
// (10 - 2 sqrt(15)) / 40 and (10 + 2 sqrt(15)) / 40
const U: f64 = 0.05635083268962915574;
const V: f64 = 0.44364916731037084426;
// 16 / 135 / 6, (2665 + 14 sqrt(15)) / 37800 / 6, (2665 - 14 sqrt(15)) / 37800 / 6 and 20 / 378 / 6
const A: f64 = 0.019753086419753086420;
const B_1: f64 = 0.011989513963169770001;
const B_2: f64 = 0.011511367871045397547;
const C: f64 = 0.0088183421516754850088;

pub(crate) static TETRAHEDRON_RULES: [TabulatedRule<3>; 4] = [
    TabulatedRule {
        order: 1,
        points: &[[0.25, 0.25, 0.25]],
        weights: &[1.0 / 6.0],
    },
    TabulatedRule {
        order: 2,
        points: &[
            [M4_A, M4_B, M4_B],
            [M4_B, M4_A, M4_B],
            [M4_B, M4_B, M4_A],
            [M4_B, M4_B, M4_B],
        ],
        weights: &[1.0 / 4.0 / 6.0, 1.0 / 4.0 / 6.0, 1.0 / 4.0 / 6.0, 1.0 / 4.0 / 6.0],
    },
    TabulatedRule {
        order: 3,
        points: &[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0 / 3.0, 1.0 / 3.0, 0.0],
            [1.0 / 3.0, 0.0, 1.0 / 3.0],
            [0.0, 1.0 / 3.0, 1.0 / 3.0],
            [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
        ],
        weights: &[
            0.025 / 6.0,
            0.025 / 6.0,
            0.025 / 6.0,
            0.025 / 6.0,
            0.225 / 6.0,
            0.225 / 6.0,
            0.225 / 6.0,
            0.225 / 6.0,
        ],
    },
    TabulatedRule {
        order: 5,
        points: &[
            [0.25, 0.25, 0.25],
            [S_1, S_1, S_1],
            [T_1, S_1, S_1],
            [S_1, T_1, S_1],
            [S_1, S_1, T_1],
            [S_2, S_2, S_2],
            [T_2, S_2, S_2],
            [S_2, T_2, S_2],
            [S_2, S_2, T_2],
            [V, U, U],
            [U, V, U],
            [U, U, V],
            [V, V, U],
            [V, U, V],
            [U, V, V],
        ],
        weights: &[A, B_1, B_1, B_1, B_1, B_2, B_2, B_2, B_2, C, C, C, C, C, C],
    },
];
